//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports and documentation
//! ├── router.rs     - Router assembly, gateway layers, root and fallback
//! └── api_routes.rs - `/api/*` resource routers
//! ```
//!
//! # Gateway Layers (outermost first)
//!
//! 1. `TraceLayer` - request spans
//! 2. `CorsLayer::permissive` - any origin
//! 3. `render_errors` - final `{message, stack}` error bodies
//! 4. `CatchPanicLayer` - a panicking handler becomes a 500
//!
//! # Routes
//!
//! - `GET /` - service metadata
//! - `/api/auth`, `/api/users`, `/api/posts`, `/api/opportunities`,
//!   `/api/connections`, `/api/messages` - resource routers
//! - anything else - JSON 404

/// Main router creation
pub mod router;

/// API endpoint routers
pub mod api_routes;

pub use router::create_router;
