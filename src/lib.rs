//! Password security toolkit
//!
//! This library provides three independent, stateless operations:
//!
//! - **generation** of passwords from a constrained alphabet, drawn from the
//!   operating system CSPRNG with guaranteed class coverage
//! - **strength evaluation** with a 0-8 score, a label and ordered
//!   recommendations, backed by an embedded common-password denylist
//! - **breach lookup** through the Pwned Passwords range API, sending only
//!   the first five hex characters of the password's SHA-1
//!
//! # Features
//!
//! - `async` (default): Enables the network breach checker (tokio + reqwest)
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Derives serialization for requests and reports
//! - `cli`: Builds the `pwd-guard` binary
//!
//! # Environment Variables
//!
//! - `PWD_GUARD_DENYLIST_PATH`: Custom denylist file for [`Denylist::from_env`]
//! - `PWD_GUARD_PWNED_URL`: Range API base URL
//!   (default: `https://api.pwnedpasswords.com`)
//! - `PWD_GUARD_PWNED_TIMEOUT_SECS`: Lookup timeout (default: `10`)
//! - `PWD_GUARD_PWNED_PADDING`: Request padded responses (default: `true`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_guard::{evaluate_password_strength, generate, GenerationRequest};
//! use secrecy::ExposeSecret;
//!
//! let password = generate(&GenerationRequest::new(16, true, true))
//!     .expect("valid request");
//! let report = evaluate_password_strength(&password);
//!
//! println!("{} -> {} ({})", password.expose_secret(), report.label, report.score);
//! for hint in report.messages() {
//!     println!("  {hint}");
//! }
//!
//! # #[cfg(feature = "async")]
//! # async fn breach(password: &secrecy::SecretString) {
//! let result = pwd_guard::check_breach(password).await;
//! match result.count {
//!     Some(0) => println!("not found in known breaches"),
//!     Some(n) => println!("seen {n} times in breaches"),
//!     None => println!("breach status unknown"),
//! }
//! # }
//! ```

// Internal modules
mod evaluator;
mod sections;

pub mod breach;
pub mod denylist;
pub mod generator;
pub mod types;

// Public API
pub use breach::{BreachConfig, BreachError, ConfigError};
pub use denylist::{default_denylist, is_common, Denylist, DenylistError};
pub use evaluator::{evaluate_password_strength, evaluate_with_denylist};
pub use generator::{
    generate, generate_password, generate_with_rng, Alphabet, GenerateError, GenerationRequest,
};
pub use types::{BreachResult, CharClass, Recommendation, StrengthLabel, StrengthReport, MAX_SCORE};

#[cfg(feature = "async")]
pub use breach::{check_breach, BreachChecker, HttpRangeSource, RangeSource};

pub use secrecy::SecretString;
