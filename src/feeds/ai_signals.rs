use serde_json::Value;

use crate::config::HIGH_CONVICTION_THRESHOLD;
use crate::normalize::{extract_rows, fields, number_at, text_at, RawRow};
use crate::scorer::rank_desc;
use crate::types::AiSignal;

use super::item::resolve_name;

fn ai_signal(row: &RawRow) -> AiSignal {
    let confidence = number_at(row, fields::CONFIDENCE);
    let decision = text_at(row, &["Decision", "decision"])
        .to_ascii_uppercase()
        .replace('_', " ");

    AiSignal {
        name: resolve_name(row),
        decision,
        confidence,
        target: number_at(row, &["Target", "target"]),
        stop_loss: number_at(row, &["StopLoss", "Stop_Loss", "stopLoss"]),
        risk_reward: text_at(row, &["RiskReward", "Risk_Reward", "riskReward"]),
        reason: text_at(row, &["Reason", "reason"]),
        time: text_at(row, fields::TIME),
        high_conviction: confidence > HIGH_CONVICTION_THRESHOLD,
    }
}

/// AI verdicts, most confident first.
pub fn build_ai_signals(payload: &Value) -> Vec<AiSignal> {
    let signals: Vec<AiSignal> = extract_rows(payload).iter().map(ai_signal).collect();
    rank_desc(signals, |s: &AiSignal| s.confidence)
}
