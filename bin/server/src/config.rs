use crate::constants::{
    DEFAULT_HOST, DEFAULT_JAR_PATH, DEFAULT_JAVA_BIN, DEFAULT_PORT, DEFAULT_SCHEMA_PATH,
};
use clap::{Arg, Command};
use std::path::PathBuf;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// JVM binary used to run the validator jar
    pub java_bin: PathBuf,
    /// Path to the jing jar
    pub jar_path: PathBuf,
    /// Path to the RELAX NG grammar documents are checked against
    pub schema_path: PathBuf,
}

impl ServerConfig {
    pub fn load() -> Result<Self, std::io::Error> {
        let matches = Command::new("server")
            .arg(
                Arg::new("java-bin")
                    .long("java-bin")
                    .value_name("BIN")
                    .help("JVM binary used to run the validator jar (default: java, or JAVA_BIN env var)"),
            )
            .arg(
                Arg::new("jar")
                    .long("jar")
                    .value_name("PATH")
                    .help("Path to the jing jar (default: jing.jar, or JING_JAR env var)"),
            )
            .arg(
                Arg::new("schema")
                    .long("schema")
                    .value_name("PATH")
                    .help("Path to the RELAX NG grammar (default: schemas/note.rng, or RNG_SCHEMA env var)"),
            )
            .arg(
                Arg::new("port")
                    .long("port")
                    .value_name("PORT")
                    .help("Server port (default: 8080, or SERVER_PORT env var)"),
            )
            .arg(
                Arg::new("host")
                    .long("host")
                    .value_name("HOST")
                    .help("Server host (default: 0.0.0.0, or SERVER_HOST env var)"),
            )
            .get_matches();

        // Priority: command-line args > environment variables > defaults
        let env_host = std::env::var("SERVER_HOST").ok();
        let env_port = std::env::var("SERVER_PORT").ok();
        let env_java_bin = std::env::var("JAVA_BIN").ok();
        let env_jar = std::env::var("JING_JAR").ok();
        let env_schema = std::env::var("RNG_SCHEMA").ok();

        let host = matches
            .get_one::<String>("host")
            .map(|s| s.as_str())
            .or(env_host.as_deref())
            .unwrap_or(DEFAULT_HOST)
            .to_string();

        let port_str = matches
            .get_one::<String>("port")
            .map(|s| s.as_str())
            .or(env_port.as_deref())
            .unwrap_or(DEFAULT_PORT);

        let port = port_str.parse().map_err(|_| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid port number: {}", port_str),
            )
        })?;

        let java_bin = PathBuf::from(
            matches
                .get_one::<String>("java-bin")
                .map(|s| s.as_str())
                .or(env_java_bin.as_deref())
                .unwrap_or(DEFAULT_JAVA_BIN),
        );

        let jar_path = PathBuf::from(
            matches
                .get_one::<String>("jar")
                .map(|s| s.as_str())
                .or(env_jar.as_deref())
                .unwrap_or(DEFAULT_JAR_PATH),
        );

        let schema_path = PathBuf::from(
            matches
                .get_one::<String>("schema")
                .map(|s| s.as_str())
                .or(env_schema.as_deref())
                .unwrap_or(DEFAULT_SCHEMA_PATH),
        );

        Ok(ServerConfig {
            host,
            port,
            java_bin,
            jar_path,
            schema_path,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
