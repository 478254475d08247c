//! Build-time page content. A renderer serializes [`site_content`] and lays
//! it out; nothing here changes at runtime.

use serde::Serialize;

use crate::core::models::SuggestedPrompt;

pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/manuel-albanese";

pub const WELCOME_MESSAGE: &str = "Ciao! Sono l'assistente AI di Manuel. \n\n\
**Raccontami del tuo business!** \n\n\
Posso analizzare il tuo settore (es. Ristorazione, Consulenza, E-commerce) e spiegarti \
concretamente come integrare l'AI per risparmiare tempo e gestire meglio le informazioni.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    Hero,
    About,
    Workflow,
    Services,
    Certifications,
    #[serde(rename = "ai-demo")]
    Demo,
    Contact,
}

impl SectionId {
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Workflow => "workflow",
            SectionId::Services => "services",
            SectionId::Certifications => "certifications",
            SectionId::Demo => "ai-demo",
            SectionId::Contact => "contact",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub target: SectionId,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceFeature {
    pub label: &'static str,
    pub tooltip: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [ServiceFeature],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct WorkflowStep {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
    pub icon: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'static str>,
    pub highlight: bool,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Chi Sono", target: SectionId::About },
    NavLink { label: "Metodo RAG", target: SectionId::Workflow },
    NavLink { label: "Servizi", target: SectionId::Services },
    NavLink { label: "Certificazioni", target: SectionId::Certifications },
    NavLink { label: "Chat Demo", target: SectionId::Demo },
    NavLink { label: "Contatti", target: SectionId::Contact },
];

pub const SUGGESTED_PROMPTS: &[SuggestedPrompt] = &[
    SuggestedPrompt {
        text: "Ho un'agenzia immobiliare, come può aiutarmi l'AI?",
        label: "Immobiliare",
    },
    SuggestedPrompt {
        text: "Gestisco uno studio legale, RAG può servirmi?",
        label: "Studio legale",
    },
    SuggestedPrompt {
        text: "Vorrei automatizzare la creazione di report.",
        label: "Report",
    },
    SuggestedPrompt {
        text: "Parlami delle esperienze passate di Manuel.",
        label: "Esperienza",
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        id: "web",
        title: "Sviluppo Web & Portali",
        description: "Il servizio \"Core\": siti web moderni, veloci e accessibili. Dal design Figma allo sviluppo React/Next.js.",
        icon: "Globe",
        features: &[
            ServiceFeature { label: "Restyling Aziendale", tooltip: "Modernizza la tua presenza online con design attuali." },
            ServiceFeature { label: "Dashboard Gestionali", tooltip: "Pannelli di controllo personalizzati per i tuoi dati." },
            ServiceFeature { label: "SEO & Performance", tooltip: "Siti ottimizzati per i motori di ricerca e ultra-veloci." },
        ],
    },
    Service {
        id: "rag",
        title: "Knowledge Management (RAG)",
        description: "Centralizza la conoscenza aziendale. Un motore di ricerca intelligente per i tuoi documenti interni.",
        icon: "BrainCircuit",
        features: &[
            ServiceFeature { label: "Passaggio di Consegne", tooltip: "Il know-how resta in azienda anche se il personale cambia. Onboarding istantaneo." },
            ServiceFeature { label: "Retrieval Veloce", tooltip: "Trova procedure e contratti in secondi interrogando l'AI, non cercando nelle cartelle." },
            ServiceFeature { label: "Chat con i tuoi Dati", tooltip: "Fai domande naturali ai tuoi manuali PDF, Excel e Word." },
        ],
    },
    Service {
        id: "automation",
        title: "AI Templates & Docs",
        description: "Sfrutta l'AI generativa per creare preventivi, mail e report partendo da template base pre-configurati.",
        icon: "FileText",
        features: &[
            ServiceFeature { label: "Generazione Preventiva", tooltip: "L'AI compila bozze di documenti basandosi sui tuoi standard aziendali." },
            ServiceFeature { label: "Mail Assistant", tooltip: "Risposte automatiche o bozze di email basate sullo storico delle conversazioni." },
            ServiceFeature { label: "Reportistica Automatica", tooltip: "Da dati grezzi a report narrativi in un click." },
        ],
    },
    Service {
        id: "local-ai",
        title: "Private AI & Security",
        description: "Soluzioni AI che girano \"in casa\" o su cloud privati. Massima sicurezza per dati sensibili.",
        icon: "ShieldCheck",
        features: &[
            ServiceFeature { label: "GDPR Compliant", tooltip: "I dati aziendali non vengono usati per addestrare modelli pubblici." },
            ServiceFeature { label: "Local LLMs", tooltip: "Uso di modelli Open Source (Llama, Mistral) per abbattere i costi di licenza." },
            ServiceFeature { label: "Integrazione Legacy", tooltip: "Connettiamo l'AI ai tuoi vecchi database SQL o gestionali." },
        ],
    },
];

pub const WORKFLOW_STEPS: &[WorkflowStep] = &[
    WorkflowStep {
        title: "1. Analisi & Discovery",
        description: "Analizziamo i flussi di lavoro manuali e i dati non strutturati (PDF, Email, Note) della tua azienda.",
        icon: "Search",
    },
    WorkflowStep {
        title: "2. Ingestione Dati",
        description: "I documenti vengono puliti, frammentati e trasformati in vettori numerici all'interno di un Knowledge Base sicuro.",
        icon: "Database",
    },
    WorkflowStep {
        title: "3. Integrazione AI",
        description: "Colleghiamo l'LLM (es. Gemini/GPT) ai tuoi dati. L'AI ora 'legge' la tua documentazione prima di rispondere.",
        icon: "Bot",
    },
    WorkflowStep {
        title: "4. Deployment & UI",
        description: "Creiamo l'interfaccia (Chatbot, Dashboard) per permettere al team di usare la nuova intelligenza.",
        icon: "Zap",
    },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification { name: "Google AI Essentials", issuer: "Google", year: "2025", icon: "BrainCircuit", url: None },
    Certification { name: "Google Prompting Essentials", issuer: "Google", year: "2025", icon: "BrainCircuit", url: None },
    Certification { name: "Foundations of Project Management", issuer: "Google", year: "2025", icon: "Server", url: None },
    Certification { name: "Fondamentali di Marketing Digitale", issuer: "Google", year: "2020", icon: "Globe", url: None },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Corporate Knowledge Base",
        description: "Sistema RAG per azienda metalmeccanica. Ridotto del 60% il tempo di ricerca manuali tecnici per i nuovi assunti.",
        tags: &["RAG", "Python", "LangChain", "React"],
        link: None,
        highlight: true,
    },
    Project {
        title: "AI Email Generator",
        description: "Plugin per la generazione automatica di risposte ai clienti basate su template aziendali pre-approvati.",
        tags: &["OpenAI API", "Chrome Extension", "Automation"],
        link: None,
        highlight: false,
    },
    Project {
        title: "Portale Bancario Compliance",
        description: "Sviluppo Frontend per dashboard finanziaria. Focus su sicurezza e visualizzazione dati complessi.",
        tags: &["Angular", "Enterprise", "UI/UX"],
        link: None,
        highlight: false,
    },
];

/// Everything the renderer needs, in page order.
#[derive(Debug, Clone, Serialize)]
pub struct SiteContent {
    pub sections: &'static [SectionId],
    pub nav_links: &'static [NavLink],
    pub services: &'static [Service],
    pub workflow: &'static [WorkflowStep],
    pub certifications: &'static [Certification],
    pub projects: &'static [Project],
    pub suggested_prompts: &'static [SuggestedPrompt],
    pub welcome_message: &'static str,
    pub linkedin_url: &'static str,
}

pub const PAGE_SECTIONS: &[SectionId] = &[
    SectionId::Hero,
    SectionId::About,
    SectionId::Workflow,
    SectionId::Services,
    SectionId::Certifications,
    SectionId::Demo,
    SectionId::Contact,
];

pub fn site_content() -> SiteContent {
    SiteContent {
        sections: PAGE_SECTIONS,
        nav_links: NAV_LINKS,
        services: SERVICES,
        workflow: WORKFLOW_STEPS,
        certifications: CERTIFICATIONS,
        projects: PROJECTS,
        suggested_prompts: SUGGESTED_PROMPTS,
        welcome_message: WELCOME_MESSAGE,
        linkedin_url: LINKEDIN_URL,
    }
}
