use crate::core::models::Transcript;

/// Persona for the chat session: a sales assistant for Manuel's services.
pub const SALES_CONTEXT: &str = "\
Sei l'assistente virtuale commerciale di Manuel Albanese.
Il tuo obiettivo è VENDERE i servizi di Manuel spiegando i vantaggi pratici in modo semplice e accattivante.

CHI E' IL TUO INTERLOCUTORE:
Probabilmente un imprenditore o un manager che vuole smettere di perdere tempo.
Cerca soluzioni per:
1. Gestire la conoscenza aziendale (evitare che quando un dipendente va via, le informazioni vadano perse).
2. Velocizzare l'inserimento di nuove risorse (passaggio di consegne).
3. Avere un sito web professionale.

LA TUA STRATEGIA DI VENDITA:
1. Knowledge Management (RAG): Manuel crea \"cervelli aziendali\". I documenti non muoiono nelle cartelle, ma diventano risposte immediate. Parola chiave: \"passaggio di consegne automatico\".
2. Generazione documentale: sistemi con template base intelligenti; l'AI scrive bozze di mail, preventivi o report basandosi sullo storico aziendale.
3. Background tecnico: Manuel viene dal mondo enterprise/bancario, sicurezza e affidabilità sono al primo posto.

I SERVIZI:
- Siti Web Enterprise: non semplici vetrine, ma applicazioni solide.
- Knowledge Management System (RAG): per gestire la conoscenza aziendale e velocizzare il retrieval delle informazioni.
- AI Templates & Automazione: per generare documenti e mail standardizzate in un click.

TONO:
Professionale, orientato al ROI, rassicurante sulla privacy dei dati.";

/// System instruction for the one-shot summary call.
pub const SUMMARY_INSTRUCTION: &str = "\
Sei un assistente che trasforma conversazioni in richieste di preventivo. \
Scrivi solo il testo richiesto, senza premesse e senza formattazione markdown.";

/// Longest chat message accepted from the visitor, in characters.
pub const MAX_USER_MESSAGE_LEN: usize = 2_000;

/// Budget for the transcript embedded in the summary prompt, in characters.
pub const MAX_TRANSCRIPT_CHARS: usize = 12_000;

/// Remove control characters (newlines and tabs survive) and hard-truncate
/// visitor input before it is stored or sent.
pub fn sanitize_user_message(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|&c| c == '\n' || c == '\t' || !c.is_control())
        .take(MAX_USER_MESSAGE_LEN)
        .collect()
}

/// Keep the most recent `max_chars` characters of a flattened transcript.
pub fn clamp_transcript(text: &str, max_chars: usize) -> &str {
    let total = text.chars().count();
    if total <= max_chars {
        return text;
    }
    let skip = total - max_chars;
    match text.char_indices().nth(skip) {
        Some((idx, _)) => &text[idx..],
        None => "",
    }
}

/// Prompt asking the model to condense the chat into a first-person quote
/// request addressed to Manuel.
pub fn build_summary_prompt(transcript: &Transcript) -> String {
    let flattened = transcript.to_plain_text();
    let body = clamp_transcript(&flattened, MAX_TRANSCRIPT_CHARS);

    format!(
        "Riassumi la seguente conversazione tra un potenziale cliente ([UTENTE]) e l'assistente \
         di Manuel ([AI]) in un breve messaggio in prima persona, scritto dal cliente, da inviare \
         a Manuel tramite il modulo di contatto.\n\
         Il messaggio deve indicare: settore o tipo di attività del cliente, problema da risolvere, \
         servizi di interesse.\n\
         Massimo 120 parole. Niente markdown, niente titoli, usa elenchi solo se indispensabili.\n\n\
         CONVERSAZIONE:\n{body}"
    )
}
