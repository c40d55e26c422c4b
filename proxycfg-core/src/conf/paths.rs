//! Dotted field paths shared by the flat edit map and field-scoped errors.

pub const SERVICE_NAME: &str = "serviceName";
pub const LISTENER_ADDRESS: &str = "listener.address";
pub const LISTENER_CONNECTION_LIMIT: &str = "listener.connectionLimit";
pub const LOAD_BALANCE: &str = "loadBalance";
pub const HEALTH_CHECK_INTERVAL: &str = "healthCheck.interval";
pub const HEALTH_CHECK_TIMEOUT: &str = "healthCheck.timeout";
pub const HEALTH_CHECK_FALL_THRESHOLD: &str = "healthCheck.fallThreshold";
pub const HEALTH_CHECK_RISE_THRESHOLD: &str = "healthCheck.riseThreshold";
pub const HEALTH_CHECK_CHECKER: &str = "healthCheck.checker";
pub const ATCP_CHECKER: &str = "healthCheck.checker.atcpChecker";
pub const MYSQL_CHECKER: &str = "healthCheck.checker.mysqlChecker";
pub const REDIS_CHECKER: &str = "healthCheck.checker.redisChecker";
pub const MYSQL_CHECKER_USERNAME: &str = "healthCheck.checker.mysqlChecker.username";
pub const REDIS_CHECKER_PASSWORD: &str = "healthCheck.checker.redisChecker.password";
pub const CONNECT_TIMEOUT: &str = "connectTimeout";
pub const IDLE_TIMEOUT: &str = "idleTimeout";
pub const PROTO_OPTION: &str = "protoOption";

/// Paths present in every flat map, whatever variants are selected.
pub const REQUIRED: &[&str] = &[
    SERVICE_NAME,
    LISTENER_ADDRESS,
    LISTENER_CONNECTION_LIMIT,
    LOAD_BALANCE,
    HEALTH_CHECK_INTERVAL,
    HEALTH_CHECK_TIMEOUT,
    HEALTH_CHECK_FALL_THRESHOLD,
    HEALTH_CHECK_RISE_THRESHOLD,
    CONNECT_TIMEOUT,
    IDLE_TIMEOUT,
    PROTO_OPTION,
];

/// Payload paths of the checker variants.
pub const CHECKER_PAYLOADS: &[&str] = &[MYSQL_CHECKER_USERNAME, REDIS_CHECKER_PASSWORD];

pub fn is_checker_payload(path: &str) -> bool {
    CHECKER_PAYLOADS.contains(&path)
}

pub fn is_known(path: &str) -> bool {
    REQUIRED.contains(&path) || is_checker_payload(path)
}
