//! Display fallback for third-party scalar types (feature-gated).

#[cfg(feature = "chrono")]
mod chrono_display {
    use chrono::{
        DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc, Weekday,
    };

    use super::super::impl_markdown_encode_display;

    impl_markdown_encode_display!(DateTime<Utc>, DateTime<Local>, DateTime<FixedOffset>);
    impl_markdown_encode_display!(NaiveDateTime, NaiveDate, NaiveTime);
    impl_markdown_encode_display!(Duration, Weekday);
}

#[cfg(feature = "time")]
mod time_display {
    use time::{
        Date, Duration, Month, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset, Weekday,
    };

    use super::super::impl_markdown_encode_display;

    impl_markdown_encode_display!(OffsetDateTime, PrimitiveDateTime, Date, Time);
    impl_markdown_encode_display!(Duration, UtcOffset, Month, Weekday);
}

#[cfg(feature = "uuid")]
mod uuid_display {
    use uuid::Uuid;

    use super::super::impl_markdown_encode_display;

    impl_markdown_encode_display!(Uuid);
}
