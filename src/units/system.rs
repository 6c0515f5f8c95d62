// ============================================================================
// Integral Value System
// Width registry and dimension tags shared by the electrical units
// ============================================================================

use crate::numeric::Dimension;

crate::value_system! {
    /// Signed integers as found on 32-bit microcontrollers. Products of two
    /// `i32` quantities are computed in `i64`.
    pub struct IntegralValueSystem[i8, i16, i32, i64];
}

/// Electric current
pub enum Current {}
impl Dimension for Current {}

/// Electric potential difference
pub enum Voltage {}
impl Dimension for Voltage {}

/// Electrical resistance
pub enum Resistance {}
impl Dimension for Resistance {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Contains, Product, ValueSystem, Width};
    use std::any::TypeId;

    #[test]
    fn test_integral_value_system_layout() {
        assert_eq!(IntegralValueSystem::len(), 4);
        assert_eq!(<IntegralValueSystem as Contains<i32>>::POSITION, 2);
        assert_eq!(IntegralValueSystem::element(3), Some(Width::of::<i64>()));
        assert!(!IntegralValueSystem::contains(Width::of::<u32>()));
    }

    #[test]
    fn test_i32_products_use_i64() {
        assert_eq!(
            TypeId::of::<Product<IntegralValueSystem, i32, i32>>(),
            TypeId::of::<i64>()
        );
    }
}
