//! Finite-input guards
//!
//! Gesture samples come straight from the host event system, so any field can
//! be NaN or infinite. Every classifier checks its inputs with `all_finite!`
//! before touching them and treats a failure as "reject".
//!
//! Usage:
//! ```rust
//! use rtl_gesture_engine::all_finite;
//!
//! assert!(all_finite!(1.0, -2.5, 0.0));
//! assert!(!all_finite!(1.0, f64::NAN));
//! assert!(!all_finite!(f64::INFINITY));
//! ```

/// True when every argument is a finite `f64`.
#[macro_export]
macro_rules! all_finite {
    ($($value:expr),+ $(,)?) => {
        true $(&& f64::is_finite($value))+
    };
}

