//! HTTP request methods with a lenient name lookup.
//!
//! ```
//! use http_methods::{Method, MethodSet};
//!
//! let method: Method = " get ".parse().unwrap();
//! assert_eq!(method, Method::Get);
//! assert!(!Method::Head.has_body());
//!
//! let allow: MethodSet = [Method::Get, Method::Head].into_iter().collect();
//! assert_eq!(allow.to_string(), "GET, HEAD");
//! ```

pub mod methods;

pub use methods::{Method, MethodSet, UnknownMethod, has_body, resolve};
