//! Domain-level constants.
//!
//! These constants define business rules and the messages shown to clients.

// =============================================================================
// Business Rules
// =============================================================================

/// Minimum age at which a user is considered of age
pub const ADULT_AGE: u32 = 18;

// =============================================================================
// User-facing Messages
// =============================================================================

/// Returned when a user lookup finds nothing
pub const MSG_USER_NOT_FOUND: &str = "Usuário não encontrado";

/// Returned after a user is stored
pub const MSG_USER_CREATED: &str = "Usuário criado com sucesso";

/// Returned when the store rejects a new user
pub const MSG_USER_CREATE_FAILED: &str = "Falha ao criar o usuário";

/// Returned after a user is removed
pub const MSG_USER_DELETED: &str = "Usuário excluído com sucesso";

/// Returned when the store cannot remove a user
pub const MSG_USER_DELETE_FAILED: &str = "Falha ao remover o usuário";

/// Returned when a path id is not an integer
pub const MSG_INVALID_USER_ID: &str = "Identificador de usuário inválido";

/// Prefix for malformed request bodies
pub const MSG_INVALID_BODY: &str = "Corpo da requisição inválido";

/// Returned for paths no route matches
pub const MSG_ROUTE_NOT_FOUND: &str = "Rota não encontrada";

/// Returned when a known path does not accept the request method
pub const MSG_METHOD_NOT_ALLOWED: &str = "Método não permitido";
