use mailrelay::config::Config;

fn set_var(key: &str, value: &str) {
    unsafe { std::env::set_var(key, value) };
}

fn remove_var(key: &str) {
    unsafe { std::env::remove_var(key) };
}

// One test function: the variables are process-global, so the scenarios run
// in sequence instead of racing across test threads.
#[test]
fn config_requires_secrets_and_defaults_port() {
    for key in ["GMAIL_USER", "GMAIL_APP_PASSWORD", "EMAIL_API_KEY", "PORT"] {
        remove_var(key);
    }

    let err = Config::init().unwrap_err();
    assert!(err.to_string().contains("GMAIL_USER"));

    set_var("GMAIL_USER", "relay@gmail.com");
    let err = Config::init().unwrap_err();
    assert!(err.to_string().contains("GMAIL_APP_PASSWORD"));

    set_var("GMAIL_APP_PASSWORD", "app-password");
    let err = Config::init().unwrap_err();
    assert!(err.to_string().contains("EMAIL_API_KEY"));

    set_var("EMAIL_API_KEY", "secret");
    let config = Config::init().unwrap();
    assert_eq!(config.gmail_user, "relay@gmail.com");
    assert_eq!(config.gmail_app_password, "app-password");
    assert_eq!(config.api_key, "secret");
    assert_eq!(config.port, 8000);

    set_var("PORT", "9025");
    let config = Config::init().unwrap();
    assert_eq!(config.port, 9025);

    set_var("PORT", "not-a-port");
    let err = Config::init().unwrap_err();
    assert!(err.to_string().contains("PORT"));

    for key in ["GMAIL_USER", "GMAIL_APP_PASSWORD", "EMAIL_API_KEY", "PORT"] {
        remove_var(key);
    }
}
