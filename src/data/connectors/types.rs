/// Required OHLC columns for price data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredColumn {
    Timestamp,
    Open,
    High,
    Low,
    Close,
}

impl RequiredColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
            Self::Open => "open",
            Self::High => "high",
            Self::Low => "low",
            Self::Close => "close",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::Timestamp,
            Self::Open,
            Self::High,
            Self::Low,
            Self::Close,
        ]
    }

    pub fn prices() -> [Self; 4] {
        [Self::Open, Self::High, Self::Low, Self::Close]
    }

    /// Common alternative column names
    pub fn aliases(&self) -> Vec<&'static str> {
        match self {
            Self::Timestamp => vec!["timestamp", "Timestamp", "date", "Date", "datetime", "DateTime", "time"],
            Self::Open => vec!["open", "Open", "OPEN", "o", "Open Price"],
            Self::High => vec!["high", "High", "HIGH", "h", "High Price"],
            Self::Low => vec!["low", "Low", "LOW", "l", "Low Price"],
            Self::Close => vec!["close", "Close", "CLOSE", "c", "Close Price"],
        }
    }
}
