//! Classical text ciphers: route transposition and polyalphabetic substitution.
//!
//! Two independent engines share the same shape: the key is validated once at
//! construction, after which `encrypt`/`decrypt` can be called any number of
//! times. Neither call mutates the engine, so one instance may be shared
//! freely between threads.
//!
//! # Architecture
//!
//! ```text
//! RouteTransposition          (column count key; ASCII letters)
//!     write row-major → read columns right-to-left, bottom-to-top
//!
//! PolyalphabeticSubstitution  (word key; 33-letter Russian alphabet)
//!     c[i] = (p[i] + k[i mod |k|]) mod 33
//! ```
//!
//! Both implement [`TextCipher`]; failures are reported as [`CipherError`].
//!
//! # Examples
//!
//! Route transposition over a three-column table:
//!
//! ```
//! use classicrypt::RouteTransposition;
//!
//! let cipher = RouteTransposition::new(3).unwrap();
//! let encrypted = cipher.encrypt("Hello!").unwrap();
//! assert_eq!(encrypted, "LOELH");
//! assert_eq!(cipher.decrypt(&encrypted).unwrap(), "HELLO");
//! ```
//!
//! Polyalphabetic substitution with a repeating key:
//!
//! ```
//! use classicrypt::PolyalphabeticSubstitution;
//!
//! let cipher = PolyalphabeticSubstitution::new("ШИФР").unwrap();
//! let encrypted = cipher.encrypt("программирование").unwrap();
//! assert_eq!(encrypted, "ЗЩГУИИБЭБЩГТШЦЭХ");
//! assert_eq!(cipher.decrypt(&encrypted).unwrap(), "ПРОГРАММИРОВАНИЕ");
//! ```
//!
//! Driving either engine through the common trait:
//!
//! ```
//! use classicrypt::{PolyalphabeticSubstitution, RouteTransposition, TextCipher};
//!
//! let ciphers: Vec<(Box<dyn TextCipher>, &str)> = vec![
//!     (Box::new(RouteTransposition::new(4).unwrap()), "attack at dawn"),
//!     (Box::new(PolyalphabeticSubstitution::new("ключ").unwrap()), "атака на рассвете"),
//! ];
//! for (cipher, text) in &ciphers {
//!     let encrypted = cipher.encrypt(text).unwrap();
//!     assert!(cipher.decrypt(&encrypted).is_ok());
//! }
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;

mod cipher;
mod polyalphabetic;
mod route_transposition;
pub(crate) mod utils;

pub use cipher::TextCipher;
pub use error::CipherError;
pub use polyalphabetic::PolyalphabeticSubstitution;
pub use route_transposition::RouteTransposition;
