// ============================================================================
// Basic Usage Example
// ============================================================================

use fixed_point::prelude::*;

fn main() {
    println!("=== Fixed-Point Example ===\n");

    // Raw construction: the coefficient is stored verbatim
    let price = Decimal64::from_scaled(ScaledInteger::new(1999, Scale(-2))); // 19.99
    let tax_rate = Decimal64::from_scaled(ScaledInteger::new(825, Scale(-4))); // 0.0825
    println!("price    = {}", price);
    println!("tax rate = {}", tax_rate);

    // Shifting construction: the human-readable value is preserved
    let quantity = Decimal64::new(3, Scale(0));
    println!("quantity = {}", quantity);

    // Multiplication adds scales: (-2) + 0 = -2
    let subtotal = price * quantity;
    println!("\nsubtotal = {} (scale {})", subtotal, subtotal.scale());

    // (-2) + (-4) = -6: six fractional digits, exact
    let tax = subtotal * tax_rate;
    println!("tax      = {} (scale {})", tax, tax.scale());

    // Addition reconciles to the finer scale
    let total = subtotal + tax;
    println!("total    = {} (scale {})", total, total.scale());

    // Rescaling truncates toward zero
    let settled = total.rescaled(Scale(-2));
    println!("settled  = {}", settled);

    // Parsing round-trips with formatting
    let parsed: Decimal64 = "64.91".parse().expect("valid decimal literal");
    println!("\nparsed \"64.91\" -> coefficient {}, scale {}", parsed.value(), parsed.scale());
    assert_eq!(parsed, settled);

    // Checked arithmetic is opt-in through the overflow predicates
    let huge = Decimal64::from_scaled(ScaledInteger::new(i64::MAX, Scale(0)));
    if addition_overflow::<i64>(huge.value(), 1) {
        println!("adding 1 to {} would overflow the 64-bit representation", huge);
    }

    // Boundary interop with rust_decimal
    let decimal = settled.to_decimal().expect("scale fits Decimal");
    println!("\nas rust_decimal: {}", decimal);

    // 128-bit coefficients carry 38 digits
    let fine = Decimal128::from_scaled(ScaledInteger::new(10i128.pow(36), Scale(-38)));
    println!("10^36 at scale -38 = {}", fine);
}
