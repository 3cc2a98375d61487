use reqwest::Method;

/// The fixed checks of a smoke run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    HealthCheck,
    ApiTest,
    Gateways,
    Login,
    VerifyToken,
}

impl Scenario {
    pub const ALL: [Scenario; 5] = [
        Scenario::HealthCheck,
        Scenario::ApiTest,
        Scenario::Gateways,
        Scenario::Login,
        Scenario::VerifyToken,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::HealthCheck => "Health Check",
            Scenario::ApiTest => "API Test",
            Scenario::Gateways => "Gateways",
            Scenario::Login => "Login",
            Scenario::VerifyToken => "Verify Token",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            Scenario::HealthCheck => "/health",
            Scenario::ApiTest => "/api/test",
            Scenario::Gateways => "/api/gateways",
            Scenario::Login => "/api/auth/login",
            Scenario::VerifyToken => "/api/auth/verify",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Scenario::Login => Method::POST,
            _ => Method::GET,
        }
    }

    pub fn expected_status(&self) -> u16 {
        200
    }

    /// Line logged before the request goes out
    pub fn banner(&self) -> &'static str {
        match self {
            Scenario::HealthCheck => "🔍 Testing health check...",
            Scenario::ApiTest => "🔍 Testing API test endpoint...",
            Scenario::Gateways => "🔍 Testing gateways...",
            Scenario::Login => "🔍 Testing login...",
            Scenario::VerifyToken => "🔍 Testing token verification...",
        }
    }
}
