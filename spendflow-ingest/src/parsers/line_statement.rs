//! One-transaction-per-line statement parser (pasted PDF/text exports)
//!
//! Expected rows after copy-paste:
//!   15 DEC   PAYMENT FROM JOHN SMITH                     150.00
//!   16 DEC   WOOLWORTHS 1234 SYDNEY          blank        45.50
//!   17 DEC   FUNDS TFER TO SAVINGS           200.00        0.00
//!
//! A row carries either a single net amount or a (withdrawal, deposit) pair.

use chrono::Month;
use regex::Regex;
use spendflow_core::Transaction;

use crate::types::{ParseReport, ParserOptions, SkipReason, SkippedLine};

/// Upper-case phrases that turn a single-amount row into a credit
const CREDIT_PHRASES: &[&str] = &["PAYMENT FROM", "DEPOSIT", "TRANSFER FROM", "TFER TRANSFER"];

#[derive(Debug, Clone)]
pub struct StatementParser {
    date_re: Regex,
    amount_re: Regex,
    padding_re: Regex,
    options: ParserOptions,
}

impl StatementParser {
    pub fn new() -> Result<Self, regex::Error> {
        Self::with_options(ParserOptions::default())
    }

    pub fn with_options(options: ParserOptions) -> Result<Self, regex::Error> {
        Ok(Self {
            date_re: Regex::new(r"^(?P<day>\d{1,2})\s+(?P<month>[A-Za-z]{3})")?,
            amount_re: Regex::new(r"(?:^|\s)(?P<token>\$?(?P<amt>[\d,]+\.\d{2}))\s*$")?,
            padding_re: Regex::new(r"\s+blank\s*")?,
            options,
        })
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse statement text, silently dropping lines that are not transactions.
    pub fn parse(&self, text: &str) -> Vec<Transaction> {
        self.parse_with_report(text).transactions
    }

    /// Like [`parse`](Self::parse) but also records why each non-blank line was dropped.
    pub fn parse_with_report(&self, text: &str) -> ParseReport {
        let mut report = ParseReport::default();

        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match self.parse_line(line) {
                Ok(txn) => report.transactions.push(txn),
                Err(reason) => {
                    let line_no = idx + 1;
                    tracing::debug!(line_no, ?reason, line, "skipping statement line");
                    report.skipped.push(SkippedLine { line_no, reason });
                }
            }
        }

        report
    }

    fn parse_line(&self, line: &str) -> Result<Transaction, SkipReason> {
        if self.is_banner(line) {
            return Err(SkipReason::Banner);
        }

        let caps = self.date_re.captures(line).ok_or(SkipReason::NoDate)?;
        caps["month"]
            .parse::<Month>()
            .map_err(|_| SkipReason::NoDate)?;
        let date = caps.get(0).map_or("", |m| m.as_str());
        let remaining = line[date.len()..].trim();

        let (rest, tokens) = self.split_trailing_amounts(remaining);
        let amounts = match tokens.len() {
            0 => return Err(SkipReason::NoAmount),
            1 | 2 => tokens.iter().map(|t| parse_amount(t)).collect::<Vec<f64>>(),
            n => return Err(SkipReason::AmbiguousAmounts(n)),
        };

        let description = self.padding_re.replace_all(rest, " ").trim().to_string();
        let amount = match amounts.as_slice() {
            [amount] => {
                if is_credit_description(&description) {
                    *amount
                } else {
                    -amount
                }
            }
            [withdrawal, deposit] => {
                if *deposit > 0.0 {
                    *deposit
                } else {
                    -withdrawal
                }
            }
            _ => return Err(SkipReason::AmbiguousAmounts(amounts.len())),
        };

        Ok(Transaction::new(date, description, normalize_zero(amount)))
    }

    fn is_banner(&self, line: &str) -> bool {
        self.options
            .skip_markers
            .iter()
            .any(|m| !m.is_empty() && line.contains(m.as_str()))
    }

    /// Peel amount tokens off the end of `remaining`, returning what is left
    /// and the tokens in left-to-right order.
    fn split_trailing_amounts<'a>(&self, remaining: &'a str) -> (&'a str, Vec<&'a str>) {
        let mut rest = remaining;
        let mut tokens = Vec::new();

        while let Some(caps) = self.amount_re.captures(rest) {
            let (Some(token), Some(amt)) = (caps.name("token"), caps.name("amt")) else {
                break;
            };
            tokens.push(amt.as_str());
            rest = rest[..token.start()].trim_end();
        }

        tokens.reverse();
        (rest, tokens)
    }
}

/// Whether a single-amount row reads as money coming in.
///
/// A credit phrase makes it a credit unless the text has "TO" and no "FROM".
pub fn is_credit_description(description: &str) -> bool {
    let upper = description.to_uppercase();
    if !CREDIT_PHRASES.iter().any(|p| upper.contains(p)) {
        return false;
    }
    !(upper.contains("TO") && !upper.contains("FROM"))
}

fn parse_amount(token: &str) -> f64 {
    token.replace(',', "").parse().unwrap_or(0.0)
}

fn normalize_zero(amount: f64) -> f64 {
    if amount == 0.0 { 0.0 } else { amount }
}

/// Parse pasted statement text with the default options.
pub fn parse_statement_text(text: &str) -> anyhow::Result<Vec<Transaction>> {
    let parser = StatementParser::new()?;
    Ok(parser.parse(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> StatementParser {
        StatementParser::new().unwrap()
    }

    #[test]
    fn test_parses_basic_rows() {
        let text = "15 DEC PAYMENT FROM JOHN SMITH 150.00\n16 DEC WOOLWORTHS 45.50\n";

        let txns = parse_statement_text(text).unwrap();
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0], Transaction::new("15 DEC", "PAYMENT FROM JOHN SMITH", 150.0));
        assert_eq!(txns[1], Transaction::new("16 DEC", "WOOLWORTHS", -45.5));
    }

    #[test]
    fn test_skips_banners_and_noise() {
        let text = r#"
Transaction Report
Date  Description  Withdrawals  Deposits
15 DEC   NETFLIX.COM                 16.99

Page 1 of 3
Opening balance 1,000.00
"#;

        let report = parser().parse_with_report(text);
        assert_eq!(report.transactions.len(), 1);
        assert_eq!(report.transactions[0].description, "NETFLIX.COM");
        assert_eq!(report.skipped_for(SkipReason::Banner), 2);
        assert_eq!(report.skipped_for(SkipReason::NoDate), 2);
        assert_eq!(report.skipped.len(), 4);
    }

    #[test]
    fn test_debit_by_default() {
        let txns = parser().parse("02 JAN KFC PARRAMATTA 12.40");
        assert_eq!(txns[0].amount, -12.40);
    }

    #[test]
    fn test_credit_phrases() {
        let p = parser();
        for desc in [
            "PAYMENT FROM ACME PTY LTD",
            "ATM DEPOSIT",
            "TRANSFER FROM J SMITH",
            "FUNDS TFER TRANSFER FROM 1234",
        ] {
            let txns = p.parse(&format!("3 FEB {desc} 80.00"));
            assert_eq!(txns[0].amount, 80.0, "{desc} should be a credit");
        }
    }

    #[test]
    fn test_to_without_from_forces_debit() {
        let p = parser();
        assert_eq!(p.parse("3 FEB DEPOSIT TO SAVINGS 80.00")[0].amount, -80.0);
        assert_eq!(p.parse("3 FEB TFER TRANSFER TO JANE 80.00")[0].amount, -80.0);
        // FROM present keeps it a credit
        assert_eq!(p.parse("3 FEB PAYMENT FROM TOM 80.00")[0].amount, 80.0);
    }

    #[test]
    fn test_two_amounts_are_withdrawal_and_deposit() {
        let p = parser();
        assert_eq!(p.parse("17 DEC FUNDS TFER TO SAVINGS 200.00 0.00")[0].amount, -200.0);
        assert_eq!(p.parse("18 DEC SALARY ACME 0.00 2,500.00")[0].amount, 2500.0);
        // both present: deposit wins
        assert_eq!(p.parse("19 DEC REVERSAL 10.00 4.00")[0].amount, 4.0);
    }

    #[test]
    fn test_three_amounts_discarded() {
        let report = parser().parse_with_report("20 DEC COLES 1.00 2.00 3.00");
        assert!(report.transactions.is_empty());
        assert_eq!(report.skipped[0].reason, SkipReason::AmbiguousAmounts(3));
    }

    #[test]
    fn test_no_amount_discarded() {
        let report = parser().parse_with_report("20 DEC COLES");
        assert!(report.transactions.is_empty());
        assert_eq!(report.skipped[0].reason, SkipReason::NoAmount);
    }

    #[test]
    fn test_dollar_sign_and_grouping() {
        let txns = parser().parse("5 MAR BUNNINGS WAREHOUSE $1,234.56");
        assert_eq!(txns[0].amount, -1234.56);
        assert_eq!(txns[0].description, "BUNNINGS WAREHOUSE");
    }

    #[test]
    fn test_blank_padding_removed() {
        let txns = parser().parse("16 DEC WOOLWORTHS 1234 blank 45.50");
        assert_eq!(txns[0].description, "WOOLWORTHS 1234");

        // any whitespace-led "blank" run is padding, even inside a word
        let txns = parser().parse("16 DEC SHOP blank5 45.50");
        assert_eq!(txns[0].description, "SHOP 5");
        let txns = parser().parse("16 DEC KMART blankets 45.50");
        assert_eq!(txns[0].description, "KMART ets");
        let txns = parser().parse("16 DEC BLANKET WAREHOUSE 45.50");
        assert_eq!(txns[0].description, "BLANKET WAREHOUSE");
    }

    #[test]
    fn test_amount_glued_to_word_stays_in_description() {
        let txns = parser().parse("16 DEC VISA PURCHASE USD12.50 18.75");
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].description, "VISA PURCHASE USD12.50");
        assert_eq!(txns[0].amount, -18.75);

        let report = parser().parse_with_report("16 DEC WOOLWORTHS45.50");
        assert!(report.transactions.is_empty());
        assert_eq!(report.skipped[0].reason, SkipReason::NoAmount);
    }

    #[test]
    fn test_date_token_rules() {
        let p = parser();
        let txns = p.parse("7 dec Cafe Sydney 4.50");
        assert_eq!(txns[0].date, "7 dec");
        assert_eq!(txns[0].description, "Cafe Sydney");

        assert!(p.parse("123 DEC CAFE 4.50").is_empty());
        assert!(p.parse("15 XYZ CAFE 4.50").is_empty());
        assert!(p.parse("CAFE 15 DEC 4.50").is_empty());
    }

    #[test]
    fn test_zero_amount_is_kept() {
        let txns = parser().parse("1 APR CARD FEE WAIVED 0.00");
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].amount, 0.0);
        assert!(txns[0].amount.is_sign_positive());
    }

    #[test]
    fn test_custom_skip_markers() {
        let opts = ParserOptions {
            skip_markers: vec!["Statement Period".into()],
        };
        let p = StatementParser::with_options(opts).unwrap();
        let txns = p.parse("1 APR Statement Period 30.00\n2 APR Page Street Cafe 5.00");
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].description, "Page Street Cafe");
    }

    #[test]
    fn test_empty_input() {
        assert!(parser().parse("").is_empty());
        let report = parser().parse_with_report("   \n\t\n");
        assert!(report.transactions.is_empty());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_is_credit_description() {
        assert!(is_credit_description("direct deposit payroll"));
        assert!(!is_credit_description("WOOLWORTHS"));
        assert!(!is_credit_description("DEPOSIT TO TERM ACCOUNT"));
    }
}
