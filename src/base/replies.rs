//! Fixed reply texts.

/// Reply to a greeting; `{author_name}` is replaced with the sender's display name.
pub const GREETING_REPLY: &str = "¡Hola {author_name}!";

/// Reply to a "how are you" question.
pub const STATUS_QUESTION_REPLY: &str = "Bien, ¿y tú?";

/// Reply to someone saying they are doing fine.
pub const ACKNOWLEDGMENT_REPLY: &str = "¡Me alegra saberlo!";

/// Reply to a compliment.
pub const COMPLIMENT_REPLY: &str = "¡Siempre lo soy!";

/// Reply to the `info` command; `{owner_name}` is replaced with the configured owner.
pub const INFO_REPLY: &str = "¡Soy un bot creado por mi dueño {owner_name}!";

/// Answers picked at random by the `pregunta` command.
pub const QUESTION_ANSWERS: &[&str] = &["Sí.", "No.", "Tal vez.", "Definitivamente sí.", "Ni lo sueñes.", "Pregúntame más tarde.", "Sin duda.", "Lo dudo mucho."];

/// Usage hint for `pregunta`.
pub const QUESTION_USAGE: &str = "Uso: {prefix}pregunta <tu pregunta>";

/// Usage hint for `numero`.
pub const NUMBER_USAGE: &str = "Uso: {prefix}numero [mínimo máximo] (por ejemplo: {prefix}numero 1 10)";

/// Fill a `{name}` placeholder in one of the templates above.
pub fn fill(template: &str, name: &str, value: &str) -> String {
    template.replace(&format!("{{{name}}}"), value)
}
