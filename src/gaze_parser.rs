// textual vector forms
//
//  3           scalar
//  3, 5        pair
//  [3] [3, 5]  sequence
//  (3, 5)      sequence, parens are accepted as brackets
use std::str::FromStr;

use super::gaze_error::GazeError;
use super::gaze_model::*;

pub(crate) fn parse_vector_args(input: &str) -> Result<VectorArgs, GazeError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(gaze_err!("empty vector input"));
    }

    let bracketed = match (text.chars().next(), text.chars().last()) {
        (Some('['), Some(']')) | (Some('('), Some(')')) => Some(&text[1..text.len() - 1]),
        (Some('[' | '('), _) | (_, Some(']' | ')')) => {
            return Err(gaze_err!(&format!("unbalanced brackets in \"{}\"", input)))
        }
        _ => None,
    };

    let body = bracketed.unwrap_or(text);
    let numbers = body
        .split(',')
        .map(|token| parse_number(token, input))
        .collect::<Result<Vec<f64>, GazeError>>()?;

    log::trace!("parsed \"{}\" to {:?}", input, numbers);

    match (bracketed.is_some(), numbers.len()) {
        (true, 1 | 2) => Ok(VectorArgs::Sequence(numbers)),
        (false, 1) => Ok(VectorArgs::Scalar(numbers[0])),
        (false, 2) => Ok(VectorArgs::Pair(numbers[0], numbers[1])),
        (_, len) => Err(gaze_err!(&format!(
            "vector needs 1 or 2 numbers, got {} in \"{}\"",
            len, input
        ))),
    }
}

fn parse_number(token: &str, input: &str) -> Result<f64, GazeError> {
    let token = token.trim();
    match token.parse::<f64>() {
        Ok(n) if !n.is_nan() => Ok(n),
        _ => Err(gaze_err!(&format!(
            "\"{}\" is not a number in \"{}\"",
            token, input
        ))),
    }
}

impl FromStr for Vector {
    type Err = GazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Vector::from_args(parse_vector_args(s)?)
    }
}
