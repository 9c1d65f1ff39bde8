//! レコードのテキスト描画
//!
//! 識別結果と履歴一覧を端末向けのプレーンテキストに整形する。
//! ラベルは全て Messages から引き、欠けた値には not_available を出す。

use crate::domain::{HistoryCollection, Messages, PlantRecord};

/// 値が空なら not_available に差し替える
fn or_na<'a>(value: &'a str, messages: &'static Messages) -> &'a str {
    if value.trim().is_empty() {
        messages.not_available
    } else {
        value
    }
}

fn push_field(out: &mut String, label: &str, value: &str, messages: &'static Messages) {
    out.push_str(&format!("  {}: {}\n", label, or_na(value, messages)));
}

fn push_section(out: &mut String, title: &str) {
    out.push_str(&format!("\n== {} ==\n", title));
}

/// 1 レコードをレポート形式に描画する
pub fn render_record(record: &PlantRecord, messages: &'static Messages) -> String {
    let report = &record.report;
    let mut out = String::new();

    push_field(&mut out, messages.scientific_name, &report.scientific_name, messages);
    push_field(&mut out, messages.common_names, &report.common_names.join(", "), messages);
    out.push_str(&format!(
        "  {}: {}%\n",
        messages.confidence,
        report.confidence.round() as i64
    ));
    push_field(&mut out, messages.description, &report.description, messages);
    push_field(&mut out, messages.benefits_title, &report.benefits, messages);
    if let Some(reasoning) = &report.reasoning {
        push_field(&mut out, messages.reasoning, reasoning, messages);
    }

    if let Some(taxonomy) = &report.taxonomy {
        push_section(&mut out, messages.taxonomy);
        push_field(&mut out, messages.genus, &taxonomy.genus, messages);
        push_field(&mut out, messages.family, &taxonomy.family, messages);
        push_field(&mut out, messages.order, &taxonomy.order, messages);
    }

    if let Some(morphology) = &report.morphology {
        push_section(&mut out, messages.morphology);
        let parts: [(&str, &Option<String>); 6] = [
            (messages.leaves, &morphology.leaves),
            (messages.flowers, &morphology.flowers),
            (messages.fruits, &morphology.fruits),
            (messages.stems, &morphology.stems),
            (messages.roots, &morphology.roots),
            (messages.nectar, &morphology.nectar),
        ];
        for (label, value) in parts {
            if let Some(value) = value {
                push_field(&mut out, label, value, messages);
            }
        }
    }

    push_section(&mut out, messages.care_guide);
    push_field(&mut out, messages.sunlight, &report.care.light, messages);
    push_field(&mut out, messages.water, &report.care.water, messages);
    push_field(&mut out, messages.soil, &report.care.soil, messages);
    push_field(&mut out, messages.humidity, &report.care.humidity, messages);
    push_field(&mut out, messages.temperature, &report.care.temperature, messages);
    push_field(&mut out, messages.fertilizer, &report.care.fertilizer, messages);
    push_field(&mut out, messages.propagation, &report.care.propagation, messages);
    push_field(&mut out, messages.pruning, &report.care.pruning, messages);

    if let Some(ecology) = &report.ecology {
        push_section(&mut out, messages.ecology);
        push_field(&mut out, messages.native, &ecology.native_region, messages);
        push_field(&mut out, messages.habitat, &ecology.habitat, messages);
        push_field(&mut out, messages.role, &ecology.role, messages);
        push_field(&mut out, messages.companions, &ecology.companions.join(", "), messages);
    }

    push_section(&mut out, messages.safety);
    let toxicity = if report.safety.is_poisonous {
        messages.poisonous
    } else {
        messages.safe
    };
    out.push_str(&format!("  {}\n", toxicity));
    if report.safety.is_poisonous {
        push_field(&mut out, messages.notes, &report.safety.poison_details, messages);
    }
    if report.safety.is_invasive {
        out.push_str(&format!("  {}\n", messages.invasive));
    }
    if report.safety.is_endangered {
        out.push_str(&format!("  {}\n", messages.endangered));
    }
    if report.safety.is_medicinal {
        push_field(&mut out, messages.medicinal, &report.safety.medicinal_uses, messages);
    }
    if !report.safety.notes.trim().is_empty() {
        push_field(&mut out, messages.notes, &report.safety.notes, messages);
    }

    push_section(&mut out, messages.health);
    out.push_str(&format!(
        "  {}: {}\n",
        messages.health,
        report.diagnostics.status.label(messages)
    ));
    if !report.diagnostics.details.trim().is_empty() {
        push_field(&mut out, messages.description, &report.diagnostics.details, messages);
    }
    if !report.diagnostics.treatment.trim().is_empty() {
        push_field(&mut out, messages.treatment, &report.diagnostics.treatment, messages);
    }
    if !report.diagnostics.prevention.trim().is_empty() {
        push_field(&mut out, messages.prevention, &report.diagnostics.prevention, messages);
    }

    if let Some(folklore) = &report.folklore {
        push_section(&mut out, messages.story);
        push_field(&mut out, messages.native, &folklore.origin, messages);
        push_field(&mut out, messages.description, &folklore.stories, messages);
    }

    if !report.similar_species.is_empty() {
        push_section(&mut out, messages.similar);
        for species in &report.similar_species {
            out.push_str(&format!(
                "  {} - {}: {}\n",
                or_na(&species.name, messages),
                messages.difference,
                or_na(&species.difference, messages)
            ));
        }
    }

    out
}

/// 履歴一覧を描画する（新しい順、1 件 1 行）
pub fn render_history(history: &HistoryCollection, messages: &'static Messages) -> String {
    if history.is_empty() {
        return format!("{}\n", messages.empty_history);
    }
    let mut out = format!("{} ({})\n", messages.history_header, history.len());
    for record in history.records() {
        let names = record.report.common_names.join(", ");
        out.push_str(&format!(
            "  {}  {}  ({}%)  {}\n",
            record.id,
            or_na(&record.report.scientific_name, messages),
            record.report.confidence.round() as i64,
            names
        ));
    }
    out
}
