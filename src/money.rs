//! Currency formatting in the accounting style: `$1,234.50`

/// Formatting settings for money amounts.
///
/// # Examples
///
/// ```
/// use finnhub::money::Accounting;
///
/// let euro = Accounting {
///     symbol: "€".into(),
///     precision: 2,
///     thousand: ".".into(),
///     decimal: ",".into(),
/// };
/// assert_eq!(euro.format_money(1234567.891), "€1.234.567,89");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accounting {
    /// Currency symbol placed before the digits
    pub symbol: String,
    /// Digits after the decimal separator
    pub precision: usize,
    /// Thousands separator
    pub thousand: String,
    /// Decimal separator
    pub decimal: String,
}

impl Default for Accounting {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            precision: 2,
            thousand: ",".to_string(),
            decimal: ".".to_string(),
        }
    }
}

impl Accounting {
    /// Format `amount` with symbol, grouping and fixed precision.
    ///
    /// The sign goes before the symbol (`-$50.00`). Amounts that round to
    /// zero carry no sign. Non-finite input is returned in its plain
    /// `Display` form.
    pub fn format_money(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return amount.to_string();
        }

        let digits = format!("{:.*}", self.precision, amount.abs());
        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (digits.as_str(), None),
        };

        let negative = amount < 0.0 && digits.bytes().any(|b| matches!(b, b'1'..=b'9'));

        let mut out = String::with_capacity(digits.len() + self.symbol.len() + 4);
        if negative {
            out.push('-');
        }
        out.push_str(&self.symbol);
        out.push_str(&group(int_part, &self.thousand));
        if let Some(frac) = frac_part {
            out.push_str(&self.decimal);
            out.push_str(frac);
        }
        out
    }

    /// Parse a string produced by [`format_money`](Self::format_money) back into a number
    pub fn unformat(&self, formatted: &str) -> Option<f64> {
        let trimmed = formatted.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix(self.symbol.as_str()).unwrap_or(rest);

        let mut plain = if self.thousand.is_empty() {
            rest.to_string()
        } else {
            rest.replace(self.thousand.as_str(), "")
        };
        if self.decimal != "." {
            plain = plain.replace(self.decimal.as_str(), ".");
        }
        if plain.is_empty() || !plain.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
            return None;
        }

        let value: f64 = plain.parse().ok()?;
        Some(if negative { -value } else { value })
    }
}

fn group(int_part: &str, separator: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// Format `amount` as US dollars with two decimals: `1234.5` becomes `$1,234.50`
pub fn format_money(amount: f64) -> String {
    Accounting::default().format_money(amount)
}
