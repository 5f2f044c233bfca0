use crate::session::Turn;

/// Instruction format families the catalog models expect.
///
/// Detection is an ordered first-match over case-insensitive substrings of
/// the model identifier. The order matters: "mistralai/Mistral-7B-Instruct"
/// must land on the Mistral wrapper, not the generic instruct one, so the
/// generic "instruct" predicate comes last before the fallback. Sending the
/// wrong wrapper measurably degrades the replies a family produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFamily {
    WebLab,
    RinnaInstruct,
    ElyzaSwallow,
    Llama3,
    Llama2,
    Mistral,
    NousHermes,
    Solar,
    Instruct,
    Plain,
}

impl ModelFamily {
    pub fn detect(model_id: &str) -> Self {
        let id = model_id.to_lowercase();

        if id.contains("weblab") || id.contains("matsuo-lab") {
            ModelFamily::WebLab
        } else if id.contains("rinna") && id.contains("instruction") {
            ModelFamily::RinnaInstruct
        } else if id.contains("elyza") || id.contains("swallow") {
            ModelFamily::ElyzaSwallow
        } else if id.contains("llama") && (id.contains("chat") || id.contains("instruct")) {
            if id.contains("llama-3") {
                ModelFamily::Llama3
            } else {
                ModelFamily::Llama2
            }
        } else if id.contains("mistral") || id.contains("zephyr") {
            ModelFamily::Mistral
        } else if id.contains("nous") {
            ModelFamily::NousHermes
        } else if id.contains("solar") {
            ModelFamily::Solar
        } else if id.contains("instruct") {
            ModelFamily::Instruct
        } else {
            ModelFamily::Plain
        }
    }

    /// Wrap the serialized context and the new message in the instruction
    /// syntax this family was tuned on.
    fn wrap(self, context: &str, message: &str) -> String {
        match self {
            ModelFamily::WebLab | ModelFamily::Instruct => format!(
                "Below is an instruction that describes a task, paired with an input that \
                 provides further context. Write a response that appropriately completes \
                 the request.\n\n### Instruction:\nCarry on a natural conversation.\n\n\
                 ### Input:\n{context}User: {message}\n\n### Response:\n"
            ),
            ModelFamily::ElyzaSwallow => format!(
                "Below is an instruction that describes a task. Write a response that \
                 appropriately completes the request.\n\n### Instruction:\n{context}User: \
                 {message}\n\n### Response:"
            ),
            ModelFamily::Llama3 => format!(
                "<|begin_of_text|><|start_header_id|>user<|end_header_id|>\n\n{context}User: \
                 {message}<|eot_id|><|start_header_id|>assistant<|end_header_id|>\n\n"
            ),
            ModelFamily::Llama2 | ModelFamily::Mistral => {
                format!("<s>[INST] {context}User: {message} [/INST]")
            }
            ModelFamily::NousHermes => {
                format!("### Instruction:\n{context}User: {message}\n\n### Response:")
            }
            ModelFamily::Solar => {
                format!("### User:\n{context}User: {message}\n\n### Assistant:")
            }
            // Rinna's instruction-sft models take raw turn-taking, same as
            // the fallback.
            ModelFamily::RinnaInstruct | ModelFamily::Plain => {
                format!("{context}User: {message}\nAssistant:")
            }
        }
    }
}

/// Serialize prior turns as plain dialogue lines, oldest first.
fn render_context(turns: &[Turn]) -> String {
    let mut out = String::new();
    for turn in turns {
        out.push_str(&format!(
            "User: {}\nAssistant: {}\n",
            turn.user, turn.assistant
        ));
    }
    out
}

/// Build the full prompt for one request: serialized context window followed
/// by the family-specific wrapper around the new message. Total over all
/// inputs; unknown identifiers fall through to the plain-dialogue format.
pub fn build_prompt(model_id: &str, window: &[Turn], message: &str) -> String {
    let context = render_context(window);
    ModelFamily::detect(model_id).wrap(&context, message)
}
