#[cfg(test)]
mod tests {
    use crate::fixtures::form;
    use crate::form::{is_valid_email, Rejection};

    #[test]
    fn test_complete_form_passes() {
        assert_eq!(form("2026-01-03", "10:00").validate(), Ok(()));
    }

    #[test]
    fn test_honeypot_is_checked_first() {
        let mut f = form("2026-01-03", "");
        f.email = "not-an-email".to_string();
        f.nickname = "bot".to_string();
        assert_eq!(f.validate(), Err(Rejection::Spam));
        assert_eq!(Rejection::Spam.message(), "提交失敗。");
    }

    #[test]
    fn test_missing_slot_before_email() {
        let mut f = form("2026-01-03", "   ");
        f.email = "broken".to_string();
        assert_eq!(f.validate(), Err(Rejection::MissingSlot));
        assert_eq!(f.validate().unwrap_err().to_string(), "請選擇預約時段！");
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut f = form("2026-01-03", "10:00");
        f.email = "abc@".to_string();
        assert_eq!(f.validate(), Err(Rejection::InvalidEmail));
    }

    #[test]
    fn test_email_patterns() {
        for ok in ["a@b.co", "first.last@studio.com.tw", "  x@y.z  ".trim()] {
            assert!(is_valid_email(ok), "{} should pass", ok);
        }
        for bad in [
            "",
            "abc",
            "abc@",
            "@b.co",
            "a@b",
            "a@.co",
            "a@b.",
            "a b@c.de",
            "a@b@c.de",
        ] {
            assert!(!is_valid_email(bad), "{} should fail", bad);
        }
    }

    #[test]
    fn test_record_is_trimmed() {
        let mut f = form(" 2026-01-03 ", " 10:00 ");
        f.email = " client@example.com ".to_string();
        let record = f.to_record();
        assert_eq!(record.date, "2026-01-03");
        assert_eq!(record.time, "10:00");
        assert_eq!(record.email, "client@example.com");
        assert_eq!(record.notes, "想要自然款");
        assert_eq!(record.name, "王小明");
    }

    #[test]
    fn test_form_deserializes_with_missing_fields() {
        let f: crate::form::BookingForm =
            serde_json::from_str(r#"{"date":"2026-01-03","time":"10:00"}"#).unwrap();
        assert!(f.nickname.is_empty());
        assert_eq!(f.validate(), Err(Rejection::InvalidEmail));
    }
}
