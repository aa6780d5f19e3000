//! Subject-verb number agreement, approximated by proximity
//!
//! A plural subject followed within a short window by a singular verb from a
//! fixed list, without crossing sentence punctuation. This is a regex
//! heuristic: it can misfire across clauses and misses verbs not in the list.

use super::{Rule, RuleContext};
use crate::finding::{Finding, FindingSource};

pub struct ConcordanceRule;

impl Rule for ConcordanceRule {
    fn id(&self) -> &'static str {
        "concordance"
    }

    fn description(&self) -> &'static str {
        "Sujeito no plural com verbo no singular"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Finding> {
        if !ctx.lexicon.concordance().is_match(ctx.lowered) {
            return Vec::new();
        }

        // The external checker already covers this class of error
        let already_reported = ctx
            .external
            .iter()
            .any(|f| f.source == FindingSource::ExternalTool && f.mentions("concord"));
        if already_reported {
            return Vec::new();
        }

        vec![Finding::grammar(
            "Possível erro de concordância: verbo no singular com sujeito no plural",
            "Quando o sujeito está no plural, o verbo deve concordar. Ex: 'Os alunos precisam' (não 'precisa'), 'As escolas contam' (não 'conta').",
        )]
    }
}
