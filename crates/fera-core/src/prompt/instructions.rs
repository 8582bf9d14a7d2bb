//! Fixed instruction block for the mentor persona.
//!
//! Renders the knowledge base into the system directive using XML tag
//! boundaries, so the model can tell persona, guide content, and behavioral
//! rules apart.

use fera_types::mentorship::MentorshipInfo;

/// Builds the system instruction block from a [`MentorshipInfo`].
///
/// Layout:
/// ```text
/// <persona>Você é {mentor_name}, especialista no guia '{title}' ...</persona>
/// <guide>Tópicos: ... Estratégias: ...</guide>
/// <highlights>Sempre destaque os benefícios da mentoria, como: ...</highlights>
/// <instructions>Guie a conversa ... sugira um contato via WhatsApp.</instructions>
/// ```
pub struct InstructionBuilder;

impl InstructionBuilder {
    /// Render the complete instruction block. Empty lists drop their section.
    pub fn build(info: &MentorshipInfo) -> String {
        let mut sections = Vec::with_capacity(4);

        sections.push(format!(
            "<persona>\n\
            Você é o {}, especialista no guia '{}' de {}.\n\
            Seu objetivo é ajudar e motivar o usuário a estruturar e vender sua mentoria.\n\
            </persona>",
            info.mentor_name.trim(),
            info.title.trim(),
            info.author.trim()
        ));

        if let Some(guide) = Self::guide_section(info) {
            sections.push(guide);
        }

        let highlights = bullet_list(&info.highlights);
        if !highlights.is_empty() {
            sections.push(format!(
                "<highlights>\n\
                Sempre destaque os benefícios da mentoria, como:\n\
                {highlights}\n\
                </highlights>"
            ));
        }

        sections.push(
            "<instructions>\n\
            Guie a conversa para que o usuário entenda como a mentoria pode transformar \
            seu conhecimento em um negócio lucrativo.\n\
            Após algumas interações, sugira um contato mais aprofundado via WhatsApp.\n\
            </instructions>"
                .to_string(),
        );

        sections.join("\n\n")
    }

    fn guide_section(info: &MentorshipInfo) -> Option<String> {
        let mut parts = Vec::new();

        let topics = bullet_list(&info.topics);
        if !topics.is_empty() {
            parts.push(format!("Tópicos do guia:\n{topics}"));
        }
        let benefits = bullet_list(&info.benefits);
        if !benefits.is_empty() {
            parts.push(format!("Benefícios:\n{benefits}"));
        }
        let strategies = bullet_list(&info.strategies);
        if !strategies.is_empty() {
            parts.push(format!("Estratégias:\n{strategies}"));
        }

        if parts.is_empty() {
            None
        } else {
            Some(format!("<guide>\n{}\n</guide>", parts.join("\n\n")))
        }
    }
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
