//! Answer validation and submission rules for application forms.

use std::collections::HashSet;

use crate::model::application::QuestionType;

/// Splits a stored comma-separated options list into trimmed entries.
pub fn parse_options(options: Option<&str>) -> Vec<String> {
    options
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

/// Validates one answer against its question's type and options.
///
/// The returned message is shown verbatim to the applicant.
pub fn validate_answer(
    question: &entity::form_question::Model,
    value: &str,
) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("The answer cannot be empty.".to_string());
    }

    let Some(question_type) = QuestionType::parse(&question.question_type) else {
        return Err(format!(
            "Question '{}' has an unknown type and cannot be answered.",
            question.label
        ));
    };

    match question_type {
        QuestionType::Text => Ok(()),
        QuestionType::Number => match value.parse::<f64>() {
            Ok(_) => Ok(()),
            Err(_) => Err(format!("'{}' is not a number.", value)),
        },
        QuestionType::Select => {
            let options = parse_options(question.options.as_deref());
            if options.iter().any(|option| option == value) {
                Ok(())
            } else {
                Err(format!(
                    "'{}' is not one of the available options: {}.",
                    value,
                    options.join(", ")
                ))
            }
        }
        QuestionType::Checkbox => {
            let options = parse_options(question.options.as_deref());
            let picked = parse_options(Some(value));

            if picked.is_empty() {
                return Err("Pick at least one option.".to_string());
            }

            match picked.iter().find(|pick| !options.contains(*pick)) {
                None => Ok(()),
                Some(unknown) => Err(format!(
                    "'{}' is not one of the available options: {}.",
                    unknown,
                    options.join(", ")
                )),
            }
        }
    }
}

/// Positions of questions that still lack an answer, in display order.
/// An application can only be submitted when this is empty.
pub fn missing_positions(
    questions: &[entity::form_question::Model],
    answered_question_ids: &HashSet<i32>,
) -> Vec<i32> {
    questions
        .iter()
        .filter(|question| !answered_question_ids.contains(&question.id))
        .map(|question| question.position)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(question_type: &str, options: Option<&str>) -> entity::form_question::Model {
        entity::form_question::Model {
            id: 1,
            form_id: 1,
            position: 1,
            label: "Question".to_string(),
            question_type: question_type.to_string(),
            options: options.map(String::from),
        }
    }

    #[test]
    fn text_answers_must_be_non_empty() {
        let q = question("text", None);
        assert!(validate_answer(&q, "hello").is_ok());
        assert!(validate_answer(&q, "   ").is_err());
    }

    #[test]
    fn number_answers_must_parse() {
        let q = question("number", None);
        assert!(validate_answer(&q, "42").is_ok());
        assert!(validate_answer(&q, "3.5").is_ok());
        assert!(validate_answer(&q, "forty-two").is_err());
    }

    #[test]
    fn select_answers_must_match_an_option() {
        let q = question("select", Some("Tank, Healer, DPS"));
        assert!(validate_answer(&q, "Healer").is_ok());
        assert!(validate_answer(&q, "Bard").is_err());
    }

    #[test]
    fn checkbox_answers_accept_subsets() {
        let q = question("checkbox", Some("Mon, Wed, Fri"));
        assert!(validate_answer(&q, "Mon").is_ok());
        assert!(validate_answer(&q, "Mon, Fri").is_ok());
        assert!(validate_answer(&q, "Mon, Sat").is_err());
    }

    #[test]
    fn unknown_question_types_are_rejected() {
        let q = question("dropdown", None);
        assert!(validate_answer(&q, "anything").is_err());
    }

    #[test]
    fn missing_positions_lists_unanswered_questions_in_order() {
        let questions = vec![
            entity::form_question::Model {
                id: 10,
                form_id: 1,
                position: 1,
                label: "A".to_string(),
                question_type: "text".to_string(),
                options: None,
            },
            entity::form_question::Model {
                id: 11,
                form_id: 1,
                position: 2,
                label: "B".to_string(),
                question_type: "text".to_string(),
                options: None,
            },
            entity::form_question::Model {
                id: 12,
                form_id: 1,
                position: 3,
                label: "C".to_string(),
                question_type: "text".to_string(),
                options: None,
            },
        ];

        let answered: HashSet<i32> = [11].into_iter().collect();

        assert_eq!(missing_positions(&questions, &answered), vec![1, 3]);
    }

    #[test]
    fn parses_option_lists_with_whitespace() {
        assert_eq!(
            parse_options(Some(" Tank ,Healer,  DPS ")),
            vec!["Tank", "Healer", "DPS"]
        );
        assert!(parse_options(None).is_empty());
        assert!(parse_options(Some(" , ,")).is_empty());
    }
}
