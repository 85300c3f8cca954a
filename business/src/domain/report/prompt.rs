/// Builds the analysis prompt for a health report.
///
/// The report text is embedded verbatim. The JSON layout described here is
/// a contract with the model only; replies are never checked against it.
pub fn build_analysis_prompt(report_text: &str) -> String {
    format!(
        r#"
Analyze the following health report text and provide a structured analysis.

Report Text:
{report_text}

Please provide the output in the following JSON format:
{{
    "symptoms": [
        {{
            "symptom": "Name of symptom",
            "trigger_events": "From which events they might get triggered"
        }}
    ],
    "chronic_disease_detected": "Name of detected chronic disease or 'None'",
    "recommendations": {{
        "exercise": ["List of recommended exercises"],
        "meditation": ["List of meditation techniques"],
        "yoga": ["List of yoga poses"]
    }},
    "medicine_info": [
        {{
            "name": "Medicine name",
            "description": "Description and why it has no side effects/harm if taken (consult specialist)"
        }}
    ],
    "motivation": "Motivational message to prevent actions/events triggering the disease",
    "warning": "A short little cute warning that I am just an AI agent and you should talk to a specialist."
}}
"#
    )
}
