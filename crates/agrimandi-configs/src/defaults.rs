//! Default value functions referenced from the serde attributes in `types`.

pub fn default_host() -> String {
    "127.0.0.1".to_string()
}

pub fn default_port() -> u16 {
    8080
}

pub fn default_workers() -> usize {
    0 // 0 = one worker per CPU
}

pub fn default_data_path() -> String {
    "./data".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}

pub fn default_jwt_secret() -> String {
    // Dev-only fallback; override via config file or AGRIMANDI_JWT_SECRET.
    "agrimandi-dev-secret-change-in-production".to_string()
}

pub fn default_trusted_issuers() -> Vec<String> {
    vec!["agrimandi".to_string(), "agrimandi-test".to_string()]
}

pub fn default_cors_max_age() -> u64 {
    600
}
