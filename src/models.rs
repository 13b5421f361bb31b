use serde::{Deserialize, Serialize};

/// Display currency for formatted amounts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurrencyMode {
    #[default]
    Krw,
    Usdt,
}

impl CurrencyMode {
    pub fn as_str(&self) -> &str {
        match self {
            CurrencyMode::Krw => "KRW",
            CurrencyMode::Usdt => "USDT",
        }
    }

    pub fn toggled(&self) -> CurrencyMode {
        match self {
            CurrencyMode::Krw => CurrencyMode::Usdt,
            CurrencyMode::Usdt => CurrencyMode::Krw,
        }
    }
}

/// Sign of a ledger entry as shown in the history lists
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Positive,
    Negative,
}

/// A settled wallet movement. Entries are immutable once appended.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Transaction {
    pub description: String,
    /// Display amount with currency symbol ("₩100,000", "€15.50")
    pub amount: String,
    pub direction: Direction,
    /// Calendar date, "YYYY.MM.DD"
    pub date: String,
}

impl Transaction {
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        direction: Direction,
        date: impl Into<String>,
    ) -> Self {
        Transaction {
            description: description.into(),
            amount: amount.into(),
            direction,
            date: date.into(),
        }
    }
}

/// One staking deposit and its projected daily earnings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StakingRecord {
    pub date: String,
    pub amount: String,
    pub apy: String,
    pub earned: String,
}

/// Named boolean toggles on the profile settings card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingKey {
    PaymentNotifications,
    ExchangeRateNotifications,
    FingerprintAuth,
    FaceAuth,
}

impl SettingKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::PaymentNotifications => "paymentNotifications",
            SettingKey::ExchangeRateNotifications => "exchangeRateNotifications",
            SettingKey::FingerprintAuth => "fingerprintAuth",
            SettingKey::FaceAuth => "faceAuth",
        }
    }

    /// Label shown on the settings card
    pub fn label(&self) -> &'static str {
        match self {
            SettingKey::PaymentNotifications => "결제 알림",
            SettingKey::ExchangeRateNotifications => "환율 알림",
            SettingKey::FingerprintAuth => "지문 인증",
            SettingKey::FaceAuth => "얼굴 인증",
        }
    }
}

/// App settings toggles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub payment_notifications: bool,
    pub exchange_rate_notifications: bool,
    pub fingerprint_auth: bool,
    pub face_auth: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            payment_notifications: true,
            exchange_rate_notifications: false,
            fingerprint_auth: true,
            face_auth: false,
        }
    }
}

impl Settings {
    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::PaymentNotifications => self.payment_notifications,
            SettingKey::ExchangeRateNotifications => self.exchange_rate_notifications,
            SettingKey::FingerprintAuth => self.fingerprint_auth,
            SettingKey::FaceAuth => self.face_auth,
        }
    }

    pub fn set(&mut self, key: SettingKey, value: bool) {
        match key {
            SettingKey::PaymentNotifications => self.payment_notifications = value,
            SettingKey::ExchangeRateNotifications => self.exchange_rate_notifications = value,
            SettingKey::FingerprintAuth => self.fingerprint_auth = value,
            SettingKey::FaceAuth => self.face_auth = value,
        }
    }
}

/// Mock account holder shown on the profile views
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub join_date: String,
    pub level: String,
    /// Lifetime staking totals (KRW)
    pub total_staking: i64,
    pub total_earned: i64,
}

impl Default for UserProfile {
    fn default() -> Self {
        UserProfile {
            name: String::from("김스테이블"),
            email: String::from("stable@example.com"),
            phone: String::from("010-1234-5678"),
            join_date: String::from("2024.01.01"),
            level: String::from("Gold"),
            total_staking: 350_000,
            total_earned: 2_485,
        }
    }
}

/// One point of the mock coin price series on the home chart
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: String,
    pub value: i64,
}

impl PricePoint {
    fn new(date: &str, value: i64) -> Self {
        PricePoint {
            date: date.to_string(),
            value,
        }
    }
}

/// Seven days of mock coin prices (KRW)
pub fn price_series() -> Vec<PricePoint> {
    vec![
        PricePoint::new("8/18", 131),
        PricePoint::new("8/19", 130),
        PricePoint::new("8/20", 129),
        PricePoint::new("8/21", 129),
        PricePoint::new("8/22", 128),
        PricePoint::new("8/23", 129),
        PricePoint::new("8/24", 130),
    ]
}

/// Opening transaction history, newest first
pub fn seed_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new("파리 카페", "€15.50", Direction::Negative, "2024.01.15"),
        Transaction::new("충전", "₩500,000", Direction::Positive, "2024.01.14"),
    ]
}

/// Opening staking history, newest first
pub fn seed_staking_history() -> Vec<StakingRecord> {
    vec![
        StakingRecord {
            date: String::from("2024.01.15"),
            amount: String::from("₩200,000"),
            apy: String::from("8.5%"),
            earned: String::from("₩1,420"),
        },
        StakingRecord {
            date: String::from("2024.01.10"),
            amount: String::from("₩150,000"),
            apy: String::from("8.5%"),
            earned: String::from("₩1,065"),
        },
    ]
}
