use crate::domain::EmailAddress;
use secrecy::SecretString;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::time::Duration;

#[derive(Clone, serde::Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

#[derive(Clone, serde::Deserialize)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

#[derive(Clone, serde::Deserialize)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_name: String,
    pub sender_email: String,
    pub recipient_email: String,
    pub authorization_token: SecretString,
    pub timeout_milliseconds: u64,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl EmailClientSettings {
    pub fn sender(&self) -> Result<EmailAddress, String> {
        EmailAddress::parse(self.sender_email.clone())
    }

    pub fn recipient(&self) -> Result<EmailAddress, String> {
        EmailAddress::parse(self.recipient_email.clone())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let environment: Environment = get_environment();
    get_settings(environment)
}

fn get_environment() -> Environment {
    std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT")
}

fn get_settings(environment: Environment) -> Result<Settings, config::ConfigError> {
    let current_dir_path =
        std::env::current_dir().expect("Failed to determine the current directory path");
    let configuration_directory = current_dir_path.join("configuration");

    let environment_config_filename = format!("{}.yaml", environment.as_str());

    let base_configuration_file = config::File::from(configuration_directory.join("base.yaml"));
    let environment_config_file =
        config::File::from(configuration_directory.join(environment_config_filename));
    let environment_variables_config = config::Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__");

    let settings = config::Config::builder()
        .add_source(base_configuration_file)
        .add_source(environment_config_file)
        .add_source(environment_variables_config)
        .build()?;

    settings.try_deserialize::<Settings>()
}
