// handlers/mod.rs - Two-tier handler layout
//
// Public (no auth) -> Protected (API key checked by the auth gate)
pub mod protected; // Every devil command group
pub mod public;    // Liveness and service description
