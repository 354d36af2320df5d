use lexi_types::{LookupOutcome, Message, WordDefinition};

/// Plain-text form of a bot reply
pub fn render_reply(message: &Message) -> String {
    let mut out = message.content.clone();

    let definition = message
        .outcome
        .clone()
        .and_then(LookupOutcome::into_definition);

    if let Some(def) = definition {
        out.push('\n');
        out.push_str(&render_definition(&def));
    }

    out
}

pub fn render_definition(def: &WordDefinition) -> String {
    let mut out = String::new();

    match &def.phonetic {
        Some(phonetic) => {
            out.push_str(&format!("{} {}\n", def.word, phonetic));
        }
        None => {
            out.push_str(&def.word);
            out.push('\n');
        }
    }

    for meaning in &def.meanings {
        out.push_str(&format!("  [{}]\n", meaning.part_of_speech));
        for (i, d) in meaning.definitions.iter().enumerate() {
            out.push_str(&format!("    {}. {}\n", i + 1, d.definition));
            if let Some(example) = &d.example {
                out.push_str(&format!("       e.g. {}\n", example));
            }
            if !d.synonyms.is_empty() {
                out.push_str(&format!("       synonyms: {}\n", d.synonyms.join(", ")));
            }
            if !d.antonyms.is_empty() {
                out.push_str(&format!("       antonyms: {}\n", d.antonyms.join(", ")));
            }
        }
    }

    if let Some(origin) = &def.origin {
        out.push_str(&format!("  origin: {}\n", origin));
    }

    out
}
