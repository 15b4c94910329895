/// Default server host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_PORT: &str = "8080";

/// Default JVM binary used to run the validator jar
pub const DEFAULT_JAVA_BIN: &str = "java";

/// Default path to the jing jar
pub const DEFAULT_JAR_PATH: &str = "jing.jar";

/// Default path to the bundled RELAX NG grammar
pub const DEFAULT_SCHEMA_PATH: &str = "schemas/note.rng";
