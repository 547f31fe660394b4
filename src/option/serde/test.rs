

#[cfg(test)]
mod test {
    use crate::option::Opt;

    #[test]
    fn serializes_as_plain_value() {
        assert_eq!(serde_json::to_string(&Opt::Present(33)).unwrap(), "33");
        assert_eq!(serde_json::to_string(&Opt::<i32>::Absent).unwrap(), "null");
    }

    #[test]
    fn deserializes_null_as_absent() {
        let present: Opt<i32> = serde_json::from_str("33").unwrap();
        assert_eq!(present, Opt::Present(33));

        let absent: Opt<i32> = serde_json::from_str("null").unwrap();
        assert_eq!(absent, Opt::Absent);
    }

    #[test]
    fn round_trips_through_plain_data() {
        let original = Opt::Present("abc".to_string());
        let encoded = serde_json::to_string(&original).unwrap();
        let decoded: Opt<String> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, original);
    }
}
