//! Built-in table of well-known currencies.
//!
//! Read-only: entries cannot be added or overridden at runtime. Every entry
//! uses banker's rounding.

use super::currency::Currency;

/// Chinese Yuan (Renminbi).
pub const CNY: Currency = Currency::builtin("CNY", "¥", 2);
/// Offshore Renminbi (Hong Kong).
pub const CNH: Currency = Currency::builtin("CNH", "¥", 2);
/// Hong Kong Dollar.
pub const HKD: Currency = Currency::builtin("HKD", "HK$", 2);
/// Macanese Pataca.
pub const MOP: Currency = Currency::builtin("MOP", "MOP$", 2);
/// New Taiwan Dollar.
pub const TWD: Currency = Currency::builtin("TWD", "NT$", 2);
/// Japanese Yen.
pub const JPY: Currency = Currency::builtin("JPY", "¥", 0);
/// South Korean Won.
pub const KRW: Currency = Currency::builtin("KRW", "₩", 0);
/// North Korean Won.
pub const KPW: Currency = Currency::builtin("KPW", "₩", 2);
/// Thai Baht.
pub const THB: Currency = Currency::builtin("THB", "฿", 2);
/// Philippine Peso.
pub const PHP: Currency = Currency::builtin("PHP", "₱", 2);
/// Vietnamese Dong.
pub const VND: Currency = Currency::builtin("VND", "₫", 0);
/// Singapore Dollar.
pub const SGD: Currency = Currency::builtin("SGD", "S$", 2);
/// Malaysian Ringgit.
pub const MYR: Currency = Currency::builtin("MYR", "RM", 2);
/// Indonesian Rupiah.
pub const IDR: Currency = Currency::builtin("IDR", "Rp", 2);
/// Indian Rupee.
pub const INR: Currency = Currency::builtin("INR", "₹", 2);
/// Russian Ruble.
pub const RUB: Currency = Currency::builtin("RUB", "₽", 2);
/// US Dollar.
pub const USD: Currency = Currency::builtin("USD", "US$", 2);
/// Euro.
pub const EUR: Currency = Currency::builtin("EUR", "€", 2);
/// Canadian Dollar.
pub const CAD: Currency = Currency::builtin("CAD", "Can$", 2);
/// Australian Dollar.
pub const AUD: Currency = Currency::builtin("AUD", "A$", 2);
/// Brazilian Real.
pub const BRL: Currency = Currency::builtin("BRL", "R$", 2);
/// Mexican Peso.
pub const MXN: Currency = Currency::builtin("MXN", "Mex$", 2);

static BUILT_IN: [Currency; 22] = [
    CNY, CNH, HKD, MOP, TWD, JPY, KRW, KPW, THB, PHP, VND, SGD, MYR, IDR, INR, RUB, USD, EUR,
    CAD, AUD, BRL, MXN,
];

/// All built-in currencies.
pub fn all() -> &'static [Currency] {
    &BUILT_IN
}

/// Looks up a built-in currency by code, ignoring case and surrounding whitespace.
pub fn find(code: &str) -> Option<&'static Currency> {
    let code = code.trim();
    BUILT_IN
        .iter()
        .find(|currency| currency.code().eq_ignore_ascii_case(code))
}
