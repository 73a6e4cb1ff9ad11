/// Claves de localStorage para la sesión persistida
pub const STORAGE_KEY_TOKEN: &str = "auth_token";
pub const STORAGE_KEY_USER: &str = "auth_user";

/// Textos de ejemplo para la vista de predicción
pub const SAMPLE_TEXTS: [&str; 3] = [
    "The company announced excellent quarterly results with record profits.",
    "Stock prices plummeted after disappointing earnings report.",
    "The merger will be completed by end of year pending regulatory approval.",
];

/// Longitud mínima de contraseña al registrarse
pub const MIN_PASSWORD_LENGTH: usize = 3;
