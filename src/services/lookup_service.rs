//! Lookup service - exchange rates, phone verification, and transaction status.
//!
//! All queries are linear scans over the read-only fixture tables. Text fields
//! are compared with [`normalize_text`], phone numbers with the
//! suffix-compatibility rule in [`phone_matches`].

use crate::{
    error::AppError,
    fixtures::Fixtures,
    models::{
        customer::PhoneVerification,
        exchange_rate::ExchangeRateEntry,
        transaction::{KycCheck, KycField, Transaction, TransactionStatusRequest},
    },
    services::normalize::{normalize_digits, normalize_text, phone_matches, text_eq},
};

/// Answers the three webhook queries from an owned set of fixtures.
///
/// Constructed once at startup and shared behind an `Arc`; it never mutates.
#[derive(Debug)]
pub struct LookupService {
    fixtures: Fixtures,
}

impl LookupService {
    pub fn new(fixtures: Fixtures) -> Self {
        Self { fixtures }
    }

    /// Find the exchange rate entry for a country.
    ///
    /// # Process
    ///
    /// 1. Resolve the input through the alias table ("usa" → "United States")
    /// 2. Compare against every table key with normalized-text equality
    ///
    /// # Errors
    ///
    /// - `MissingCountry`: No country supplied
    /// - `CountryNotFound`: No entry matched; carries the original input
    pub fn find_country_rate(&self, country: Option<&str>) -> Result<&ExchangeRateEntry, AppError> {
        let input = country
            .filter(|c| !c.is_empty())
            .ok_or(AppError::MissingCountry)?;

        let wanted = normalize_text(self.resolve_alias(input));

        self.fixtures
            .exchange_rates
            .iter()
            .find(|entry| normalize_text(&entry.country) == wanted)
            .ok_or_else(|| {
                tracing::debug!(country = input, "No exchange rate for country");
                AppError::CountryNotFound {
                    country: input.to_string(),
                }
            })
    }

    /// Map a caller's spelling onto a table key, or return the input unchanged.
    fn resolve_alias<'a>(&'a self, input: &'a str) -> &'a str {
        self.fixtures
            .country_aliases
            .iter()
            .find(|a| text_eq(&a.alias, input))
            .map(|a| a.country.as_str())
            .unwrap_or(input)
    }

    /// First transaction, in table order, whose mobile number matches.
    pub fn find_customer_by_phone(&self, phone_number: &str) -> Option<&Transaction> {
        let query = normalize_digits(phone_number);

        self.fixtures
            .transactions
            .iter()
            .find(|t| phone_matches(&query, &normalize_digits(&t.mobile_number)))
    }

    /// Verify a caller's phone number against the customer list.
    ///
    /// Missing input is not an error: it degrades to an unverified result.
    pub fn verify_phone(&self, phone_number: Option<&str>) -> PhoneVerification {
        let Some(customer) = phone_number.and_then(|p| self.find_customer_by_phone(p)) else {
            return PhoneVerification::unverified();
        };

        PhoneVerification {
            verified: true,
            customer_name: Some(customer.customer_name.clone()),
            has_transactions: true,
        }
    }

    /// Last transaction, in table order, whose mobile number matches.
    ///
    /// Table order stands in for recency; `transaction_date` is display-only
    /// and is not consulted.
    pub fn find_last_transaction_by_phone(&self, phone_number: &str) -> Option<&Transaction> {
        let query = normalize_digits(phone_number);

        self.fixtures
            .transactions
            .iter()
            .rev()
            .find(|t| phone_matches(&query, &normalize_digits(&t.mobile_number)))
    }

    /// Transaction matching a reference exactly and a customer name loosely.
    ///
    /// The reference is trimmed but otherwise compared verbatim. The name goes
    /// through [`normalize_text`]. Blank values never match.
    pub fn find_transaction_by_reference_and_name(
        &self,
        reference: &str,
        customer_name: &str,
    ) -> Option<&Transaction> {
        let reference = reference.trim();
        let name = normalize_text(customer_name);

        if reference.is_empty() || name.is_empty() {
            return None;
        }

        self.fixtures
            .transactions
            .iter()
            .find(|t| t.transaction_reference == reference && normalize_text(&t.customer_name) == name)
    }

    /// Resolve a transaction and apply any identity checks.
    ///
    /// # Lookup Modes
    ///
    /// - **Phone** (takes precedence): most recent transaction for the number
    /// - **Reference + name**: used only when no phone number is supplied
    ///
    /// # Errors
    ///
    /// - `MissingLookupFields`: Neither mode has its inputs
    /// - `TransactionNotFound`: The selected mode found nothing
    /// - `KycMismatch`: A supplied identity field disagrees with the record
    pub fn transaction_status(
        &self,
        request: &TransactionStatusRequest,
    ) -> Result<&Transaction, AppError> {
        let transaction = match (
            request.phone_number.as_deref(),
            request.transaction_reference.as_deref(),
            request.customer_name.as_deref(),
        ) {
            (Some(phone), _, _) => self.find_last_transaction_by_phone(phone),
            (None, Some(reference), Some(name)) => {
                self.find_transaction_by_reference_and_name(reference, name)
            }
            _ => return Err(AppError::MissingLookupFields),
        }
        .ok_or(AppError::TransactionNotFound)?;

        let kyc = request.kyc();
        if !kyc.is_empty() {
            let mismatched_fields = kyc_mismatches(transaction, &kyc);
            if !mismatched_fields.is_empty() {
                tracing::warn!(
                    reference = %transaction.transaction_reference,
                    fields = ?mismatched_fields,
                    "KYC check failed"
                );
                return Err(AppError::KycMismatch { mismatched_fields });
            }
        }

        Ok(transaction)
    }
}

/// Supplied identity fields that disagree with the transaction.
///
/// Fields are reported in a fixed order: nationality, beneficiary name,
/// beneficiary bank. Fields the caller did not supply are skipped.
pub fn kyc_mismatches(transaction: &Transaction, kyc: &KycCheck) -> Vec<KycField> {
    [
        (KycField::Nationality, &kyc.nationality, &transaction.nationality),
        (
            KycField::BeneficiaryName,
            &kyc.beneficiary_name,
            &transaction.beneficiary_name,
        ),
        (
            KycField::BeneficiaryBank,
            &kyc.beneficiary_bank,
            &transaction.beneficiary_bank,
        ),
    ]
    .into_iter()
    .filter_map(|(field, supplied, actual)| {
        let supplied = supplied.as_deref()?;
        (!text_eq(supplied, actual)).then_some(field)
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> LookupService {
        LookupService::new(Fixtures::sample().unwrap())
    }

    fn request() -> TransactionStatusRequest {
        TransactionStatusRequest::default()
    }

    fn transaction(reference: &str, mobile: &str, date: &str) -> Transaction {
        Transaction {
            transaction_reference: reference.to_string(),
            customer_name: "Asha".to_string(),
            mobile_number: mobile.to_string(),
            transaction_date: date.to_string(),
            amount_kwd: 120.0,
            beneficiary_name: "Asha".to_string(),
            beneficiary_bank: "HDFC".to_string(),
            nationality: "India".to_string(),
            status: "Transaction processed to beneficiary bank".to_string(),
            channel: "Kiosk".to_string(),
        }
    }

    #[test]
    fn rate_lookup_ignores_case_and_whitespace() {
        let service = service();

        for input in ["India", "india", "  INDIA ", "InDiA"] {
            let entry = service.find_country_rate(Some(input)).unwrap();
            assert_eq!(entry.currency_code, "INR");
        }

        let entry = service.find_country_rate(Some("sri    lanka")).unwrap();
        assert_eq!(entry.country, "Sri Lanka");
    }

    #[test]
    fn aliases_resolve_to_united_states() {
        let service = service();

        for input in ["usa", "US", " Usa "] {
            let entry = service.find_country_rate(Some(input)).unwrap();
            assert_eq!(entry.country, "United States");
            assert_eq!(entry.rate, "3.25839");
        }
    }

    #[test]
    fn alias_to_missing_country_is_not_found() {
        let err = service().find_country_rate(Some("UAE")).unwrap_err();
        assert_eq!(
            err,
            AppError::CountryNotFound {
                country: "UAE".to_string()
            }
        );
    }

    #[test]
    fn missing_country_is_reported() {
        let service = service();

        assert_eq!(service.find_country_rate(None), Err(AppError::MissingCountry));
        assert_eq!(service.find_country_rate(Some("")), Err(AppError::MissingCountry));
    }

    #[test]
    fn unknown_country_echoes_input() {
        let err = service().find_country_rate(Some("  Narnia")).unwrap_err();
        assert_eq!(
            err,
            AppError::CountryNotFound {
                country: "  Narnia".to_string()
            }
        );
    }

    #[test]
    fn prefix_of_country_does_not_match() {
        let err = service().find_country_rate(Some("Ind")).unwrap_err();
        assert_eq!(err.code(), "COUNTRY_NOT_FOUND");
    }

    #[test]
    fn descriptive_rate_is_returned_verbatim() {
        let service = service();
        let entry = service.find_country_rate(Some("egypt")).unwrap();
        assert_eq!(entry.rate, "For 1000 EGP = 6.588 KWD");
        assert_eq!(entry.commission, 1.5);
    }

    #[test]
    fn phone_verification_with_and_without_country_code() {
        let service = service();

        for input in ["96597215518", "97215518", "+965 9721 5518"] {
            let result = service.verify_phone(Some(input));
            assert!(result.verified);
            assert_eq!(result.customer_name.as_deref(), Some("Kareem"));
            assert!(result.has_transactions);
        }
    }

    #[test]
    fn unknown_or_missing_phone_is_unverified() {
        let service = service();

        assert_eq!(service.verify_phone(None), PhoneVerification::unverified());
        assert_eq!(
            service.verify_phone(Some("12345678901")),
            PhoneVerification::unverified()
        );
        assert_eq!(
            service.verify_phone(Some("not a number")),
            PhoneVerification::unverified()
        );
    }

    #[test]
    fn verification_returns_first_match_but_status_returns_last() {
        let fixtures = Fixtures {
            exchange_rates: vec![],
            country_aliases: vec![],
            transactions: vec![
                transaction("1001", "96511112222", "December 1st, 2025"),
                transaction("1002", "11112222", "January 3rd, 2025"),
            ],
        };
        let service = LookupService::new(fixtures);

        let first = service.find_customer_by_phone("96511112222").unwrap();
        assert_eq!(first.transaction_reference, "1001");

        // Last inserted wins even though its date is earlier.
        let txn = service
            .transaction_status(&TransactionStatusRequest {
                phone_number: Some("96511112222".to_string()),
                ..request()
            })
            .unwrap();
        assert_eq!(txn.transaction_reference, "1002");
    }

    #[test]
    fn status_by_reference_and_name() {
        let service = service();
        let txn = service
            .transaction_status(&TransactionStatusRequest {
                transaction_reference: Some("7603475".to_string()),
                customer_name: Some("  NAZMUL ".to_string()),
                ..request()
            })
            .unwrap();

        assert_eq!(txn.customer_name, "Nazmul");
        assert_eq!(txn.status, "Transaction rejected");
    }

    #[test]
    fn reference_must_match_exactly() {
        let service = service();

        let err = service
            .transaction_status(&TransactionStatusRequest {
                transaction_reference: Some("760347".to_string()),
                customer_name: Some("Nazmul".to_string()),
                ..request()
            })
            .unwrap_err();
        assert_eq!(err, AppError::TransactionNotFound);

        let err = service
            .transaction_status(&TransactionStatusRequest {
                transaction_reference: Some("7603475".to_string()),
                customer_name: Some("Kareem".to_string()),
                ..request()
            })
            .unwrap_err();
        assert_eq!(err, AppError::TransactionNotFound);
    }

    #[test]
    fn phone_takes_precedence_over_reference() {
        let service = service();
        let txn = service
            .transaction_status(&TransactionStatusRequest {
                phone_number: Some("919582301703".to_string()),
                transaction_reference: Some("7603475".to_string()),
                customer_name: Some("Nazmul".to_string()),
                ..request()
            })
            .unwrap();

        assert_eq!(txn.customer_name, "Nithin");
    }

    #[test]
    fn missing_lookup_fields() {
        let service = service();

        assert_eq!(
            service.transaction_status(&request()),
            Err(AppError::MissingLookupFields)
        );
        assert_eq!(
            service.transaction_status(&TransactionStatusRequest {
                transaction_reference: Some("7603475".to_string()),
                ..request()
            }),
            Err(AppError::MissingLookupFields)
        );
    }

    #[test]
    fn unknown_phone_is_not_found() {
        let err = service()
            .transaction_status(&TransactionStatusRequest {
                phone_number: Some("5550000".to_string()),
                ..request()
            })
            .unwrap_err();

        assert_eq!(err, AppError::TransactionNotFound);
    }

    #[test]
    fn kyc_mismatch_reports_only_wrong_fields() {
        let err = service()
            .transaction_status(&TransactionStatusRequest {
                phone_number: Some("96550480304".to_string()),
                nationality: Some("India".to_string()),
                beneficiary_bank: Some("agrani".to_string()),
                ..request()
            })
            .unwrap_err();

        assert_eq!(
            err,
            AppError::KycMismatch {
                mismatched_fields: vec![KycField::Nationality]
            }
        );
    }

    #[test]
    fn kyc_mismatch_keeps_field_order() {
        let service = service();
        let txn = service.find_customer_by_phone("97215518").unwrap();

        let mismatches = kyc_mismatches(
            txn,
            &KycCheck {
                nationality: Some("Kuwait".to_string()),
                beneficiary_name: Some("Someone Else".to_string()),
                beneficiary_bank: Some("NBK".to_string()),
            },
        );

        assert_eq!(
            mismatches,
            [
                KycField::Nationality,
                KycField::BeneficiaryName,
                KycField::BeneficiaryBank
            ]
        );
    }

    #[test]
    fn matching_kyc_returns_transaction() {
        let service = service();
        let txn = service
            .transaction_status(&TransactionStatusRequest {
                phone_number: Some("97215518".to_string()),
                nationality: Some(" egypt".to_string()),
                beneficiary_name: Some("KAREEM".to_string()),
                beneficiary_bank: Some("bmr".to_string()),
                ..request()
            })
            .unwrap();

        assert_eq!(txn.transaction_reference, "4560157");
        assert_eq!(txn.status, "Transaction on hold");
    }
}
