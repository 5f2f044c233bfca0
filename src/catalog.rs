/// One entry in the static model catalog: the Inference API key and a
/// human-readable label for menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelDescriptor {
    pub id: &'static str,
    pub label: &'static str,
}

/// Models known to work with the hosted Inference API. The first entry is
/// the default selection.
pub const CATALOG: &[ModelDescriptor] = &[
    // Japanese-focused models
    ModelDescriptor {
        id: "cyberagent/open-calm-7b",
        label: "CyberAgent Open CALM 7B",
    },
    ModelDescriptor {
        id: "rinna/japanese-gpt-neox-3.6b-instruction-sft",
        label: "Rinna GPT-NeoX 3.6B",
    },
    ModelDescriptor {
        id: "matsuo-lab/weblab-10b-instruction-sft",
        label: "Matsuo Lab WebLab 10B",
    },
    ModelDescriptor {
        id: "stabilityai/japanese-stablelm-instruct-alpha-7b",
        label: "Japanese StableLM 7B",
    },
    ModelDescriptor {
        id: "tokyotech-llm/Swallow-7b-instruct-hf",
        label: "Swallow 7B Instruct",
    },
    ModelDescriptor {
        id: "elyza/ELYZA-japanese-Llama-2-7b-instruct",
        label: "ELYZA Japanese Llama 2 7B",
    },
    // Multilingual and English models
    ModelDescriptor {
        id: "microsoft/DialoGPT-large",
        label: "DialoGPT Large",
    },
    ModelDescriptor {
        id: "bigscience/bloom-7b1",
        label: "BLOOM 7B",
    },
    ModelDescriptor {
        id: "mistralai/Mistral-7B-Instruct-v0.2",
        label: "Mistral 7B Instruct v0.2",
    },
    ModelDescriptor {
        id: "microsoft/DialoGPT-medium",
        label: "DialoGPT Medium",
    },
    ModelDescriptor {
        id: "HuggingFaceH4/zephyr-7b-beta",
        label: "Zephyr 7B Beta",
    },
    ModelDescriptor {
        id: "NousResearch/Nous-Hermes-2-Yi-34B",
        label: "Nous Hermes 2 Yi 34B",
    },
    ModelDescriptor {
        id: "upstage/SOLAR-10.7B-Instruct-v1.0",
        label: "SOLAR 10.7B Instruct",
    },
    // 70B class, requires a PRO account
    ModelDescriptor {
        id: "meta-llama/Meta-Llama-3.1-70B-Instruct",
        label: "Llama 3.1 70B Instruct (PRO)",
    },
    ModelDescriptor {
        id: "meta-llama/Llama-2-70b-chat-hf",
        label: "Llama 2 70B Chat (PRO)",
    },
    ModelDescriptor {
        id: "meta-llama/Meta-Llama-3-70B-Instruct",
        label: "Llama 3 70B Instruct (PRO)",
    },
];

pub fn default_model() -> ModelDescriptor {
    CATALOG[0]
}

/// Look up a catalog entry by its identifier.
pub fn find(id: &str) -> Option<ModelDescriptor> {
    CATALOG.iter().copied().find(|m| m.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_first_catalog_entry() {
        assert_eq!(default_model().id, "cyberagent/open-calm-7b");
        assert_eq!(default_model(), CATALOG[0]);
    }

    #[test]
    fn find_known_and_unknown_ids() {
        let m = find("mistralai/Mistral-7B-Instruct-v0.2").unwrap();
        assert_eq!(m.label, "Mistral 7B Instruct v0.2");
        assert!(find("acme/unknown-model").is_none());
    }

    #[test]
    fn catalog_ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
