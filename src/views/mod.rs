pub mod alerts;
pub mod app;
pub mod home;
pub mod login;
pub mod soporte_list;
pub mod upload_excel;

pub use alerts::render_alerts;
pub use app::render_app;
pub use home::render_home;
pub use login::render_login;
pub use soporte_list::render_soporte_list;
pub use upload_excel::{render_upload_excel, RESULTS_ID};
