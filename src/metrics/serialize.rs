pub mod timestamp {
    use chrono::NaiveDateTime;
    use serde::Serializer;

    use crate::configuration::constants::report::GENERATED_AT_FORMAT;

    pub fn serialize<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = timestamp.format(GENERATED_AT_FORMAT).to_string();
        serializer.serialize_str(formatted.as_str())
    }
}

pub mod opt_timestamp {
    use chrono::NaiveDateTime;
    use serde::Serializer;

    use crate::configuration::constants::report::EVENT_TIME_FORMAT;

    pub fn serialize<S>(
        timestamp: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match timestamp {
            Some(timestamp) => {
                let formatted = timestamp.format(EVENT_TIME_FORMAT).to_string();
                serializer.serialize_str(formatted.as_str())
            }
            None => serializer.serialize_none(),
        }
    }
}
