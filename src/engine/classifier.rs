//! Rule-based account classification
//!
//! A description is matched against the chart through a fixed chain of
//! matchers. Each matcher is a plain function over a [`MatchContext`]; the
//! first one that returns an account wins:
//!
//! 1. keyword dictionary ([`match_keyword`])
//! 2. name overlap between account and description ([`match_name_overlap`])
//! 3. expense/revenue category or code prefix ([`match_category`])
//! 4. first account of the chart ([`match_first_account`])

use crate::config::EngineConfig;
use crate::engine::keywords::KeywordDictionary;
use crate::types::*;

/// Account chosen for a description and the tier that chose it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'a> {
    pub account: &'a CoaItem,
    pub tier: MatchTier,
}

/// Inputs shared by every matcher in the chain
#[derive(Debug)]
pub struct MatchContext<'a, 'c> {
    pub coa: &'a [CoaItem],
    /// Lowercased transaction description
    pub description: String,
    pub fallback: TransactionType,
    /// Designated bank/cash account, skipped by name overlap
    pub bank: Option<&'a CoaItem>,
    pub config: &'c EngineConfig,
}

impl<'a, 'c> MatchContext<'a, 'c> {
    pub fn new(
        coa: &'a [CoaItem],
        description: &str,
        fallback: TransactionType,
        bank: Option<&'a CoaItem>,
        config: &'c EngineConfig,
    ) -> Self {
        Self {
            coa,
            description: description.to_lowercase(),
            fallback,
            bank,
            config,
        }
    }
}

/// A single step of the fallback chain
pub type Matcher = for<'a, 'b, 'c> fn(&'b MatchContext<'a, 'c>) -> Option<&'a CoaItem>;

/// The fallback chain, in the order it is tried
pub const MATCH_CHAIN: [(MatchTier, Matcher); 4] = [
    (MatchTier::Keyword, match_keyword),
    (MatchTier::NameOverlap, match_name_overlap),
    (MatchTier::Category, match_category),
    (MatchTier::FirstAccount, match_first_account),
];

/// Find the first rule whose keywords hit the description and whose
/// canonical account exists in the chart.
pub fn match_keyword<'a>(ctx: &MatchContext<'a, '_>) -> Option<&'a CoaItem> {
    for rule in ctx.config.keywords.rules() {
        if !rule.matches(&ctx.description) {
            continue;
        }
        let wanted = rule.account_name.to_lowercase();
        if let Some(account) = ctx.coa.iter().find(|a| a.name.to_lowercase() == wanted) {
            return Some(account);
        }
        tracing::debug!(account = %rule.account_name, "keyword hit but account not in chart");
    }
    None
}

/// First non-bank account whose name contains, or is contained in, the description
pub fn match_name_overlap<'a>(ctx: &MatchContext<'a, '_>) -> Option<&'a CoaItem> {
    ctx.coa
        .iter()
        .filter(|account| !ctx.bank.is_some_and(|bank| std::ptr::eq(*account, bank)))
        .find(|account| {
            let name = account.name.to_lowercase();
            ctx.description.contains(&name) || name.contains(&ctx.description)
        })
}

/// First expense account for debits, first revenue account for credits
pub fn match_category<'a>(ctx: &MatchContext<'a, '_>) -> Option<&'a CoaItem> {
    let config = ctx.config;
    let (category, prefix) = match ctx.fallback {
        TransactionType::Debit => (&config.expense_category, &config.expense_code_prefix),
        TransactionType::Credit => (&config.revenue_category, &config.revenue_code_prefix),
    };
    let category = category.to_lowercase();

    ctx.coa.iter().find(|account| {
        account.category.to_lowercase() == category || account.code.starts_with(prefix.as_str())
    })
}

/// First account of the chart, used when every other matcher fails
pub fn match_first_account<'a>(ctx: &MatchContext<'a, '_>) -> Option<&'a CoaItem> {
    ctx.coa.first()
}

/// Pick the bank/cash account: the first whose name contains a bank marker,
/// otherwise the first account of the chart.
pub fn select_bank_account<'a>(coa: &'a [CoaItem], markers: &[String]) -> Option<&'a CoaItem> {
    coa.iter()
        .find(|account| {
            let name = account.name.to_lowercase();
            markers.iter().any(|marker| name.contains(&marker.to_lowercase()))
        })
        .or_else(|| coa.first())
}

/// Classification engine running the fallback chain with an injected configuration
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: EngineConfig,
}

impl Classifier {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Default configuration with a different keyword dictionary
    pub fn with_keywords(keywords: KeywordDictionary) -> Self {
        Self::new(EngineConfig::default().with_keywords(keywords))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Classify a description against the chart.
    ///
    /// Returns `None` only when the chart is empty.
    pub fn classify<'a>(
        &self,
        coa: &'a [CoaItem],
        description: &str,
        fallback: TransactionType,
    ) -> Option<Classification<'a>> {
        let bank = select_bank_account(coa, &self.config.bank_markers);
        self.classify_with_bank(coa, bank, description, fallback)
    }

    pub(crate) fn classify_with_bank<'a>(
        &self,
        coa: &'a [CoaItem],
        bank: Option<&'a CoaItem>,
        description: &str,
        fallback: TransactionType,
    ) -> Option<Classification<'a>> {
        let ctx = MatchContext::new(coa, description, fallback, bank, &self.config);
        MATCH_CHAIN.iter().find_map(|(tier, matcher)| {
            matcher(&ctx).map(|account| Classification {
                account,
                tier: *tier,
            })
        })
    }
}
