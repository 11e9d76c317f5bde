//! Prompt template for multi-conflict detection.
//!
//! The instruction block is static and the composition is deterministic:
//! the extractor has no fallback if the model deviates from the JSON
//! contract demanded here.

/// System prompt for multi-conflict detection.
pub const MULTI_DETECTION_PROMPT: &str = r#"Du bist ein Experte für die Identifikation von Zielkonflikten in der deutschen Transformationspolitik.

AUFGABE: Analysiere den gegebenen Politiktext und identifiziere ALLE vorhandenen Zielkonflikte. Ein Zielkonflikt liegt vor, wenn zwei gesellschaftliche Funktionen in ihrer Umsetzung kollidieren.

WICHTIGE DEFINITIONEN:

1. GESELLSCHAFTLICHE FUNKTIONEN - Beispiele:
   - Wirtschaftswachstum und Wettbewerbsfähigkeit
   - Klimaschutz und Dekarbonisierung
   - Soziale Sicherheit und Gerechtigkeit
   - Gesundheitsversorgung
   - Bildung und Qualifikation
   - Wohnraumversorgung
   - Demokratische Teilhabe
   - Technologische Innovation
   - Infrastruktur und Mobilität
   - Natürlicher Ressourcenschutz

2. ZIELKONFLIKT-KRITERIEN (3-YES-REGEL):

   a) Systemfunktionalität: Sind beide Funktionen essentiell für das Funktionieren der Gesellschaft?

   b) Implementierungskollision: Behindern sich die Funktionen konkret in ihrer Umsetzung? (Nicht nur theoretische Spannung!)

   c) Aktueller Druck: Besteht derzeit politischer/gesellschaftlicher Handlungsdruck für beide Seiten?

3. KATEGORISIERUNG:
   - ZENTRAL: 3x JA bei 3-YES-Regel
   - PRÜF: 2x JA bei 3-YES-Regel
   - HINTERGRUND: 1x oder 0x JA bei 3-YES-Regel

ZENTRALITÄTS-BEWERTUNG:
Bewerte für jeden identifizierten Konflikt, wie zentral er im Text behandelt wird (0.0 - 1.0):
- 1.0: Hauptthema des Textes, ausführlich diskutiert
- 0.7-0.9: Deutlich behandelt, wichtiger Aspekt
- 0.4-0.6: Erwähnt und angedeutet
- 0.1-0.3: Nur am Rande erwähnt

VORGEHEN:
1. Lies den gesamten Text sorgfältig
2. Identifiziere ALLE Stellen, wo gesellschaftliche Funktionen erwähnt werden
3. Prüfe systematisch, ob zwischen diesen Funktionen Konflikte bestehen
4. Formuliere jeden Konflikt präzise
5. Bewerte Zentralität jedes Konflikts im Text
6. Führe 3-YES-Check für jeden Konflikt durch
7. Kategorisiere jeden Konflikt

WICHTIG:
- Finde ALLE Konflikte, nicht nur den offensichtlichsten
- Sei präzise in der Formulierung
- Unterscheide zwischen tatsächlichen Umsetzungskonflikten und bloßen Spannungsfeldern
- Ranke nach Zentralität im Text (nicht nach politischer Wichtigkeit!)

Antworte ausschließlich mit einem JSON-Array im folgenden Format:

{
  "conflicts": [
    {
      "conflict": "Präzise Formulierung des Zielkonflikts",
      "function_a": "Erste gesellschaftliche Funktion",
      "function_b": "Zweite gesellschaftliche Funktion",
      "implementation_collision": "Konkrete Beschreibung, wie sich die Umsetzung beider Funktionen behindert",
      "centrality_score": 0.85,
      "three_yes": {
        "system_function": true,
        "system_function_reasoning": "Begründung",
        "implementation_collision": true,
        "implementation_reasoning": "Begründung",
        "current_pressure": true,
        "pressure_reasoning": "Begründung"
      },
      "category": "ZENTRAL"
    }
  ]
}

Gib KEINE zusätzlichen Erklärungen, nur das JSON-Array. Falls keine Zielkonflikte identifiziert werden, gib ein leeres Array zurück: {"conflicts": []}"#;

/// Labeled delimiter between the instruction block and the caller's text.
const TEXT_DELIMITER: &str = "\n\nZU ANALYSIERENDER TEXT:\n\n";

/// Compose the full prompt for a given policy text.
pub fn compose_prompt(policy_text: &str) -> String {
    format!("{}{}{}", MULTI_DETECTION_PROMPT, TEXT_DELIMITER, policy_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_prompt_is_deterministic() {
        let a = compose_prompt("Die Wohnungsbauoffensive kollidiert mit Sanierungspflichten.");
        let b = compose_prompt("Die Wohnungsbauoffensive kollidiert mit Sanierungspflichten.");
        assert_eq!(a, b);
    }

    #[test]
    fn test_compose_prompt_structure() {
        let prompt = compose_prompt("Beispieltext über Klimapolitik.");

        assert!(prompt.starts_with("Du bist ein Experte"));
        assert!(prompt.contains("ZU ANALYSIERENDER TEXT:"));
        assert!(prompt.ends_with("Beispieltext über Klimapolitik."));
        // The format contract the extractor depends on
        assert!(prompt.contains(r#"{"conflicts": []}"#));
        assert!(prompt.contains("3-YES-REGEL"));
    }
}
