//! Keyword-based category classification.
//!
//! Each classifier is an ordered list of `(keyword, category)` rules matched
//! case-insensitively. Most keywords match as substrings; short keywords that
//! also occur inside unrelated words ("rent" in "Florentine", "roth" in
//! "Brothers") only match as whole words. The first matching rule wins, so table
//! order is the tie-break when several keywords appear in the same text
//! (e.g. "barber shop" is Personal Care because Personal Care precedes
//! Shopping, and "coffee" is matched before the bare "fee" rule).

use rust_decimal::Decimal;

use super::categories_model::MainBucket;
use crate::constants::FALLBACK_DETAILED_CATEGORY;

/// A single `(keyword, category)` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule<C> {
    pub keyword: &'static str,
    pub category: C,
    /// Match only between word boundaries (a trailing plural "s" is allowed)
    pub whole_word: bool,
}

impl<C: Copy> KeywordRule<C> {
    const fn new(keyword: &'static str, category: C) -> Self {
        Self {
            keyword,
            category,
            whole_word: false,
        }
    }

    const fn word(keyword: &'static str, category: C) -> Self {
        Self {
            keyword,
            category,
            whole_word: true,
        }
    }

    /// `text` must already be lowercased.
    pub fn matches(&self, text: &str) -> bool {
        if !self.whole_word {
            return text.contains(self.keyword);
        }
        text.match_indices(self.keyword).any(|(start, _)| {
            let before = text[..start].chars().next_back();
            let rest = &text[start + self.keyword.len()..];
            let rest = rest.strip_prefix('s').unwrap_or(rest);
            !before.is_some_and(char::is_alphanumeric)
                && !rest.chars().next().is_some_and(char::is_alphanumeric)
        })
    }
}

const fn d(keyword: &'static str, category: &'static str) -> KeywordRule<&'static str> {
    KeywordRule::new(keyword, category)
}

const fn dw(keyword: &'static str, category: &'static str) -> KeywordRule<&'static str> {
    KeywordRule::word(keyword, category)
}

const fn m(keyword: &'static str, bucket: MainBucket) -> KeywordRule<MainBucket> {
    KeywordRule::new(keyword, bucket)
}

const fn mw(keyword: &'static str, bucket: MainBucket) -> KeywordRule<MainBucket> {
    KeywordRule::word(keyword, bucket)
}

/// Detailed classification rules, evaluated top to bottom.
pub const DETAILED_RULES: &[KeywordRule<&str>] = &[
    // Debt payments
    d("credit card payment", "Credit Card Payments"),
    d("card payment", "Credit Card Payments"),
    d("credit card", "Credit Card Payments"),
    d("loan payment", "Loan Payments"),
    d("student loan", "Loan Payments"),
    d("auto loan", "Loan Payments"),
    d("personal loan", "Loan Payments"),
    d("loan", "Loan Payments"),
    // Money in and money moved
    d("payroll", "Income"),
    d("salary", "Income"),
    d("wages", "Income"),
    d("paycheck", "Income"),
    d("direct deposit", "Income"),
    d("income", "Income"),
    d("dividend", "Income"),
    d("interest earned", "Income"),
    d("transfer", "Transfers"),
    d("zelle", "Transfers"),
    d("venmo", "Transfers"),
    d("savings", "Savings/Investment"),
    d("investment", "Savings/Investment"),
    d("retirement", "Savings/Investment"),
    d("401k", "Savings/Investment"),
    d("brokerage", "Savings/Investment"),
    d("ira contribution", "Savings/Investment"),
    dw("roth", "Savings/Investment"),
    d("cash & atm", "Cash & ATM"),
    d("atm withdrawal", "Cash & ATM"),
    d("cash withdrawal", "Cash & ATM"),
    d("cash advance", "Cash & ATM"),
    // Must precede the housing "rent" rule
    d("car rental", "Travel"),
    d("rental car", "Travel"),
    // Home
    d("mortgage", "Housing"),
    d("housing", "Housing"),
    dw("rent", "Housing"),
    dw("hoa", "Housing"),
    d("property management", "Housing"),
    d("landlord", "Housing"),
    d("home improvement", "Home Improvement"),
    d("hardware", "Home Improvement"),
    d("home depot", "Home Improvement"),
    d("lowe's", "Home Improvement"),
    d("furniture", "Home Improvement"),
    d("utilities", "Utilities"),
    d("utility", "Utilities"),
    d("electric", "Utilities"),
    d("natural gas", "Utilities"),
    dw("water", "Utilities"),
    d("sewer", "Utilities"),
    d("trash", "Utilities"),
    d("power bill", "Utilities"),
    // Must precede "mobile"
    d("auto & maintenance", "Auto & Maintenance"),
    d("auto repair", "Auto & Maintenance"),
    d("automotive", "Auto & Maintenance"),
    d("automobile", "Auto & Maintenance"),
    d("auto parts", "Auto & Maintenance"),
    d("car wash", "Auto & Maintenance"),
    d("oil change", "Auto & Maintenance"),
    d("mechanic", "Auto & Maintenance"),
    d("phone", "Phone & Internet"),
    d("mobile", "Phone & Internet"),
    d("wireless", "Phone & Internet"),
    d("internet", "Phone & Internet"),
    d("broadband", "Phone & Internet"),
    d("cable", "Phone & Internet"),
    // Food
    d("grocery", "Groceries"),
    d("groceries", "Groceries"),
    d("supermarket", "Groceries"),
    d("whole foods", "Groceries"),
    d("trader joe", "Groceries"),
    d("publix", "Groceries"),
    d("safeway", "Groceries"),
    d("kroger", "Groceries"),
    d("coffee", "Coffee Shops"),
    d("starbucks", "Coffee Shops"),
    d("cafe", "Coffee Shops"),
    d("espresso", "Coffee Shops"),
    d("dunkin", "Coffee Shops"),
    // Must precede the rideshare "uber" rule
    d("uber eats", "Food & Dining"),
    d("doordash", "Food & Dining"),
    d("grubhub", "Food & Dining"),
    d("restaurant", "Food & Dining"),
    d("dining", "Food & Dining"),
    d("food", "Food & Dining"),
    d("pizza", "Food & Dining"),
    d("burger", "Food & Dining"),
    d("takeout", "Food & Dining"),
    d("bar & grill", "Food & Dining"),
    d("grill", "Food & Dining"),
    d("bakery", "Food & Dining"),
    // Getting around
    d("gas station", "Gas & Fuel"),
    d("gasoline", "Gas & Fuel"),
    d("fuel", "Gas & Fuel"),
    d("petrol", "Gas & Fuel"),
    d("parking", "Parking & Tolls"),
    dw("toll", "Parking & Tolls"),
    // Must precede the transit "train" rule
    d("fitness", "Fitness"),
    d("gym", "Fitness"),
    d("yoga", "Fitness"),
    d("pilates", "Fitness"),
    d("personal training", "Fitness"),
    d("public transit", "Public Transit"),
    d("transit", "Public Transit"),
    d("subway", "Public Transit"),
    d("metro", "Public Transit"),
    d("train", "Public Transit"),
    d("bus fare", "Public Transit"),
    d("bus pass", "Public Transit"),
    dw("rail", "Public Transit"),
    d("rideshare", "Rideshare & Taxi"),
    d("uber", "Rideshare & Taxi"),
    d("lyft", "Rideshare & Taxi"),
    d("taxi", "Rideshare & Taxi"),
    d("transportation", "Transportation"),
    d("vehicle", "Transportation"),
    d("car payment", "Transportation"),
    d("commute", "Transportation"),
    // Health and family
    d("insurance", "Insurance"),
    d("geico", "Insurance"),
    d("state farm", "Insurance"),
    d("pharmacy", "Pharmacy"),
    d("prescription", "Pharmacy"),
    d("drugstore", "Pharmacy"),
    d("walgreens", "Pharmacy"),
    d("cvs", "Pharmacy"),
    d("healthcare", "Healthcare"),
    d("health", "Healthcare"),
    d("medical", "Healthcare"),
    d("doctor", "Healthcare"),
    d("hospital", "Healthcare"),
    d("clinic", "Healthcare"),
    d("dental", "Healthcare"),
    d("dentist", "Healthcare"),
    d("urgent care", "Healthcare"),
    d("optometr", "Healthcare"),
    d("vision", "Healthcare"),
    d("tuition", "Education"),
    d("education", "Education"),
    d("school", "Education"),
    d("university", "Education"),
    d("college", "Education"),
    d("textbook", "Education"),
    d("course", "Education"),
    d("childcare", "Childcare"),
    d("child care", "Childcare"),
    d("daycare", "Childcare"),
    d("babysit", "Childcare"),
    d("nanny", "Childcare"),
    d("petco", "Pets"),
    d("petsmart", "Pets"),
    d("pet store", "Pets"),
    d("pet supplies", "Pets"),
    d("pet care", "Pets"),
    d("veterinar", "Pets"),
    d("pets", "Pets"),
    // Fun
    d("streaming", "Streaming & Subscriptions"),
    d("subscription", "Streaming & Subscriptions"),
    d("netflix", "Streaming & Subscriptions"),
    d("spotify", "Streaming & Subscriptions"),
    d("hulu", "Streaming & Subscriptions"),
    d("disney+", "Streaming & Subscriptions"),
    d("gaming", "Gaming"),
    d("video game", "Gaming"),
    d("steam", "Gaming"),
    d("playstation", "Gaming"),
    d("xbox", "Gaming"),
    d("nintendo", "Gaming"),
    d("entertainment", "Entertainment"),
    d("movie", "Entertainment"),
    d("cinema", "Entertainment"),
    d("theater", "Entertainment"),
    d("theatre", "Entertainment"),
    d("concert", "Entertainment"),
    d("ticket", "Entertainment"),
    d("amusement", "Entertainment"),
    d("recreation", "Entertainment"),
    d("museum", "Entertainment"),
    // Must precede the bare "bar" and "shop" rules
    d("personal care", "Personal Care"),
    d("barber", "Personal Care"),
    d("salon", "Personal Care"),
    d("hair", "Personal Care"),
    d("massage", "Personal Care"),
    d("day spa", "Personal Care"),
    d("beauty", "Personal Care"),
    d("cosmetic", "Personal Care"),
    d("nail", "Personal Care"),
    d("alcohol", "Alcohol & Bars"),
    d("liquor", "Alcohol & Bars"),
    d("brewery", "Alcohol & Bars"),
    d("winery", "Alcohol & Bars"),
    d("wine", "Alcohol & Bars"),
    dw("pub", "Alcohol & Bars"),
    dw("bar", "Alcohol & Bars"),
    d("gift", "Gifts & Donations"),
    d("donation", "Gifts & Donations"),
    d("charity", "Gifts & Donations"),
    d("church", "Gifts & Donations"),
    d("nonprofit", "Gifts & Donations"),
    d("clothing", "Clothing"),
    d("apparel", "Clothing"),
    d("shoes", "Clothing"),
    d("fashion", "Clothing"),
    d("electronics", "Electronics"),
    d("best buy", "Electronics"),
    d("apple store", "Electronics"),
    d("computer", "Electronics"),
    // Trips
    d("airfare", "Airfare"),
    d("airline", "Airfare"),
    d("flight", "Airfare"),
    d("airport", "Airfare"),
    d("hotel", "Hotels & Lodging"),
    d("motel", "Hotels & Lodging"),
    d("lodging", "Hotels & Lodging"),
    d("resort", "Hotels & Lodging"),
    d("airbnb", "Hotels & Lodging"),
    d("travel", "Travel"),
    d("vacation", "Travel"),
    d("cruise", "Travel"),
    // Obligations and services
    d("taxes", "Taxes"),
    dw("tax", "Taxes"),
    d("irs payment", "Taxes"),
    d("internal revenue", "Taxes"),
    d("overdraft", "Fees & Charges"),
    d("late fee", "Fees & Charges"),
    d("service charge", "Fees & Charges"),
    d("bank fee", "Fees & Charges"),
    d("penalty", "Fees & Charges"),
    dw("fee", "Fees & Charges"),
    d("business", "Business Services"),
    d("office supplies", "Business Services"),
    d("advertising", "Business Services"),
    d("shipping", "Business Services"),
    d("postage", "Business Services"),
    d("consulting", "Business Services"),
    d("government", "Government & Legal"),
    d("legal", "Government & Legal"),
    d("attorney", "Government & Legal"),
    d("court", "Government & Legal"),
    d("dmv", "Government & Legal"),
    d("license", "Government & Legal"),
    // Generic retail last
    d("shopping", "Shopping"),
    d("shop", "Shopping"),
    d("store", "Shopping"),
    d("amazon", "Shopping"),
    d("target", "Shopping"),
    d("walmart", "Shopping"),
    d("retail", "Shopping"),
    d("merchandise", "Shopping"),
];

/// Main-bucket rules, evaluated top to bottom. Anything unmatched is Lifestyle.
pub const MAIN_BUCKET_RULES: &[KeywordRule<MainBucket>] = &[
    m("income", MainBucket::Income),
    m("payroll", MainBucket::Income),
    m("salary", MainBucket::Income),
    m("wages", MainBucket::Income),
    m("paycheck", MainBucket::Income),
    m("direct deposit", MainBucket::Income),
    m("dividend", MainBucket::Income),
    m("interest earned", MainBucket::Income),
    m("savings", MainBucket::Savings),
    m("investment", MainBucket::Savings),
    m("retirement", MainBucket::Savings),
    m("401k", MainBucket::Savings),
    m("brokerage", MainBucket::Savings),
    m("ira contribution", MainBucket::Savings),
    mw("roth", MainBucket::Savings),
    mw("rent", MainBucket::Essentials),
    m("mortgage", MainBucket::Essentials),
    m("housing", MainBucket::Essentials),
    m("utilit", MainBucket::Essentials),
    m("electric", MainBucket::Essentials),
    mw("water", MainBucket::Essentials),
    m("natural gas", MainBucket::Essentials),
    m("gas station", MainBucket::Essentials),
    m("fuel", MainBucket::Essentials),
    m("grocer", MainBucket::Essentials),
    m("supermarket", MainBucket::Essentials),
    m("insurance", MainBucket::Essentials),
    m("health", MainBucket::Essentials),
    m("medical", MainBucket::Essentials),
    m("doctor", MainBucket::Essentials),
    m("hospital", MainBucket::Essentials),
    m("pharmacy", MainBucket::Essentials),
    m("dental", MainBucket::Essentials),
    m("transportation", MainBucket::Essentials),
    m("transit", MainBucket::Essentials),
    m("loan", MainBucket::Essentials),
    m("credit card payment", MainBucket::Essentials),
    m("childcare", MainBucket::Essentials),
    m("daycare", MainBucket::Essentials),
    m("tuition", MainBucket::Essentials),
    m("education", MainBucket::Essentials),
    m("taxes", MainBucket::Essentials),
    m("phone", MainBucket::Essentials),
    m("internet", MainBucket::Essentials),
];

/// Keywords that mark a positive amount as income for aggregate reporting.
pub const INCOME_KEYWORDS: &[&str] = &["transfer", "deposit", "payroll", "salary", "wages", "income"];

/// Keywords that veto [`INCOME_KEYWORDS`].
pub const INCOME_EXCLUSION_KEYWORDS: &[&str] = &["credit card payment", "payment", "loan payment"];

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

fn first_match<C: Copy>(rules: &[KeywordRule<C>], text: &str) -> Option<C> {
    let normalized = normalize(text);
    rules
        .iter()
        .find(|rule| rule.matches(&normalized))
        .map(|rule| rule.category)
}

/// Classifies free text into a detailed category.
///
/// Returns `"Miscellaneous"` for `None` and for text no rule matches.
pub fn classify_detailed(text: Option<&str>) -> &'static str {
    text.and_then(|t| first_match(DETAILED_RULES, t))
        .unwrap_or(FALLBACK_DETAILED_CATEGORY)
}

/// Classifies free text into one of the four main buckets.
///
/// Both `None` and unmatched text return `Lifestyle`. Note that this differs
/// from [`classify_detailed`], whose fallback is `"Miscellaneous"`; the
/// asymmetry is relied on by the dashboard aggregation and kept as is.
pub fn classify_main_bucket(text: Option<&str>) -> MainBucket {
    text.and_then(|t| first_match(MAIN_BUCKET_RULES, t))
        .unwrap_or(MainBucket::Lifestyle)
}

/// Narrow income test used when summing monthly income.
///
/// A strictly positive amount counts as income when its text mentions one of
/// [`INCOME_KEYWORDS`] and none of [`INCOME_EXCLUSION_KEYWORDS`]. This takes
/// precedence over [`classify_main_bucket`] for aggregate reporting.
pub fn is_income_transaction(amount: Decimal, text: Option<&str>) -> bool {
    if amount <= Decimal::ZERO {
        return false;
    }
    let Some(text) = text else {
        return false;
    };
    let normalized = normalize(text);
    INCOME_KEYWORDS.iter().any(|k| normalized.contains(k))
        && !INCOME_EXCLUSION_KEYWORDS
            .iter()
            .any(|k| normalized.contains(k))
}

/// Every detailed category the classifier can produce, in table order,
/// followed by the fallback.
pub fn detailed_categories() -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = Vec::new();
    for rule in DETAILED_RULES {
        if !categories.contains(&rule.category) {
            categories.push(rule.category);
        }
    }
    categories.push(FALLBACK_DETAILED_CATEGORY);
    categories
}
