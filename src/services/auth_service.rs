// ============================================================================
// AUTH SERVICE - Persistencia de la sesión en el almacenamiento del cliente
// ============================================================================

use std::rc::Rc;

use crate::models::{LoginResponse, UserSummary};
use crate::utils::{KeyValueStore, ACCESS_TOKEN_KEY, TOKEN_TYPE_KEY, USER_KEY};

const DEFAULT_TOKEN_TYPE: &str = "bearer";

/// Sesión persistida: token opaco + tipo + resumen del usuario
#[derive(Clone, PartialEq, Debug)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    pub user: Option<UserSummary>,
}

impl Session {
    /// Valor para la cabecera `Authorization`
    pub fn authorization(&self) -> String {
        let token_type = if self.token_type.eq_ignore_ascii_case(DEFAULT_TOKEN_TYPE) {
            "Bearer"
        } else {
            self.token_type.as_str()
        };
        format!("{} {}", token_type, self.access_token)
    }
}

/// Lee y escribe las tres entradas de sesión (`access_token`, `token_type`, `user`)
#[derive(Clone)]
pub struct AuthService {
    store: Rc<dyn KeyValueStore>,
}

impl AuthService {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// La presencia del token es la única comprobación de validez
    pub fn load_session(&self) -> Option<Session> {
        let access_token = self.store.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())?;
        let token_type = self
            .store
            .get(TOKEN_TYPE_KEY)
            .unwrap_or_else(|| DEFAULT_TOKEN_TYPE.to_string());
        let user = self.store.get(USER_KEY).and_then(|raw| {
            serde_json::from_str::<UserSummary>(&raw)
                .map_err(|e| log::warn!("⚠️ [AUTH] Usuario guardado ilegible: {}", e))
                .ok()
        });
        Some(Session {
            access_token,
            token_type,
            user,
        })
    }

    pub fn save_session(&self, response: &LoginResponse) -> Result<Session, String> {
        self.store.set(ACCESS_TOKEN_KEY, &response.access_token)?;
        self.store.set(TOKEN_TYPE_KEY, &response.token_type)?;
        if let Some(user) = &response.user {
            let json = serde_json::to_string(user)
                .map_err(|e| format!("Error serializando usuario: {}", e))?;
            self.store.set(USER_KEY, &json)?;
        }
        log::info!("💾 [AUTH] Sesión guardada");
        Ok(Session {
            access_token: response.access_token.clone(),
            token_type: response.token_type.clone(),
            user: response.user.clone(),
        })
    }

    pub fn clear_session(&self) -> Result<(), String> {
        for key in [ACCESS_TOKEN_KEY, TOKEN_TYPE_KEY, USER_KEY] {
            self.store.remove(key)?;
        }
        log::info!("🗑️ [AUTH] Sesión eliminada");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryStore;

    fn respuesta() -> LoginResponse {
        LoginResponse {
            access_token: "tok-123".into(),
            token_type: "bearer".into(),
            user: Some(UserSummary {
                id: 1,
                username: "admin".into(),
                email: Some("admin@example.com".into()),
            }),
        }
    }

    #[test]
    fn saves_three_raw_entries() {
        let store = Rc::new(MemoryStore::new());
        let service = AuthService::new(store.clone());
        service.save_session(&respuesta()).unwrap();

        assert_eq!(store.get("access_token").as_deref(), Some("tok-123"));
        assert_eq!(store.get("token_type").as_deref(), Some("bearer"));
        let user: serde_json::Value = serde_json::from_str(&store.get("user").unwrap()).unwrap();
        assert_eq!(user["username"], "admin");
    }

    #[test]
    fn load_requires_only_the_token() {
        let store = Rc::new(MemoryStore::new());
        let service = AuthService::new(store.clone());
        assert_eq!(service.load_session(), None);

        store.set("access_token", "solo-token").unwrap();
        let session = service.load_session().unwrap();
        assert_eq!(session.access_token, "solo-token");
        assert_eq!(session.token_type, "bearer");
        assert_eq!(session.user, None);
        assert_eq!(session.authorization(), "Bearer solo-token");
    }

    #[test]
    fn corrupt_user_json_is_ignored() {
        let store = Rc::new(MemoryStore::new());
        store.set("access_token", "t").unwrap();
        store.set("user", "{no es json").unwrap();
        let session = AuthService::new(store).load_session().unwrap();
        assert_eq!(session.user, None);
    }

    #[test]
    fn clear_removes_everything() {
        let store = Rc::new(MemoryStore::new());
        let service = AuthService::new(store.clone());
        service.save_session(&respuesta()).unwrap();
        service.clear_session().unwrap();
        assert_eq!(service.load_session(), None);
        assert_eq!(store.get("user"), None);
    }
}
