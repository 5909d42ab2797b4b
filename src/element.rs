//! The numeric capability shared by the generic kernels.

use num_traits::NumAssign;

/// Element types the generic kernels can multiply.
///
/// `NumAssign` gives us a zero value, `+`/`*`, and `+=` - everything the
/// triple loop and the tiled accumulation need. `to_f64` is how the
/// comparator widens both sides to a common high-precision type before
/// taking the difference.
///
/// The quantized kernel deliberately does NOT go through this trait: its
/// two operands have different widths and signedness, and hiding that
/// behind a single `T` would bury the widening rules that make it correct.
pub trait Element: Copy + NumAssign {
    /// Widen to f64 for tolerance comparison.
    fn to_f64(self) -> f64;
}

impl Element for f32 {
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Element for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

impl Element for i8 {
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Element for i32 {
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}
