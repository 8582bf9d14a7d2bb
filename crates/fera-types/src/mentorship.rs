//! Mentorship product knowledge and call-to-action payload.
//!
//! `MentorshipInfo` is the knowledge base the mentor persona is built from:
//! guide title, author, topics, benefits, and sales strategies. The defaults
//! describe the "Crie Uma Mentoria Lucrativa" guide. `CallToAction` is the
//! static payload surfaced once the interaction threshold is reached.

use serde::{Deserialize, Serialize};

/// Knowledge base describing the mentorship product being pitched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MentorshipInfo {
    /// Display name of the mentor persona.
    pub mentor_name: String,
    /// Title of the guide the mentor specializes in.
    pub title: String,
    pub author: String,
    /// Table of contents of the guide.
    pub topics: Vec<String>,
    /// Outcomes the guide promises.
    pub benefits: Vec<String>,
    /// Acquisition and launch strategies covered by the guide.
    pub strategies: Vec<String>,
    /// Selling points the mentor must stress in every conversation.
    pub highlights: Vec<String>,
}

impl Default for MentorshipInfo {
    fn default() -> Self {
        Self {
            mentor_name: "FERA Mentor".to_string(),
            title: "Crie Uma Mentoria Lucrativa".to_string(),
            author: "Instituto Vida FERA".to_string(),
            topics: to_strings(&[
                "O que é uma Mentoria de Alto Impacto?",
                "Por que criar uma mentoria agora?",
                "Passo 1: Encontrar seu nicho e diferencial",
                "Passo 2: Definir objetivos e metas com o método SMART",
                "Passo 3: Criar um plano de ação estruturado",
                "Passo 4: Construir sua marca pessoal",
                "Como monetizar e escalar sua mentoria",
                "Automação e IA para mentorias",
            ]),
            benefits: to_strings(&[
                "Aceleração de resultados dos mentorados",
                "Fortalecimento da marca pessoal e autoridade",
                "Modelo escalável, permitindo atender mais clientes",
                "Uso de IA e automação para reduzir esforço",
                "Facilidade na estruturação e venda de mentorias",
                "Conversão de conhecimento em renda recorrente",
            ]),
            strategies: to_strings(&[
                "Uso de redes sociais e tráfego pago",
                "Método SMART para definir metas",
                "Criação de uma página de vendas atrativa",
                "Modelos de atração e conversão de clientes",
                "Lançamento digital em até 35 dias",
            ]),
            highlights: to_strings(&[
                "Aceleração de resultados dos mentorados.",
                "Maior autoridade e posicionamento no mercado.",
                "Monetização escalável sem precisar trocar tempo por dinheiro.",
                "Uso de automação e IA para tornar o processo mais eficiente.",
            ]),
        }
    }
}

/// Static call-to-action shown once the conversation crosses the threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallToAction {
    pub headline: String,
    pub pitch: String,
    pub button_label: String,
    pub url: String,
}

impl Default for CallToAction {
    fn default() -> Self {
        Self {
            headline: "🚀 Quer criar sua mentoria de sucesso e transformar seu conhecimento \
                       em um negócio lucrativo?"
                .to_string(),
            pitch: "Podemos te ajudar a estruturar um programa de alto impacto e vender \
                    de forma escalável!"
                .to_string(),
            button_label: "Conversar no WhatsApp".to_string(),
            url: "https://api.whatsapp.com/send?phone=5561991151740&text=Quero%20ajuda%20para%20estruturar%20minha%20mentoria!"
                .to_string(),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
