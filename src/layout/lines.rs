use super::*;

/// Groups the tokens of one page into lines ordered by `(top, x0)`.
pub fn build_lines(tokens: &[Token], params: &LayoutParams) -> Vec<Line> {
    let mut sorted = tokens
        .iter()
        .filter(|token| !token.text.trim().is_empty())
        .collect::<Vec<&Token>>();
    sorted.sort_by(|left, right| {
        round_to_tenth(left.top)
            .total_cmp(&round_to_tenth(right.top))
            .then(left.x0.total_cmp(&right.x0))
    });

    let mut lines = Vec::<Line>::new();
    let mut current = Vec::<&Token>::new();
    let mut reference_top = 0.0_f64;

    for token in sorted {
        if !current.is_empty() && (token.top - reference_top).abs() > params.line_threshold {
            if let Some(line) = assemble_line(&mut current) {
                lines.push(line);
            }
            current.clear();
        }

        if current.is_empty() {
            reference_top = token.top;
        }
        current.push(token);
    }

    if let Some(line) = assemble_line(&mut current) {
        lines.push(line);
    }

    lines.sort_by(|left, right| {
        left.top
            .total_cmp(&right.top)
            .then(left.x0.total_cmp(&right.x0))
    });
    lines
}

fn assemble_line(tokens: &mut [&Token]) -> Option<Line> {
    if tokens.is_empty() {
        return None;
    }

    tokens.sort_by(|left, right| left.x0.total_cmp(&right.x0));

    let text = tokens
        .iter()
        .map(|token| token.text.trim())
        .collect::<Vec<&str>>()
        .join(" ");
    if text.is_empty() {
        return None;
    }

    let top = tokens
        .iter()
        .map(|token| token.top)
        .fold(f64::INFINITY, f64::min);
    let bottom = tokens
        .iter()
        .map(|token| token.bottom)
        .fold(f64::NEG_INFINITY, f64::max);
    let x0 = tokens
        .iter()
        .map(|token| token.x0)
        .fold(f64::INFINITY, f64::min);

    Some(Line {
        text,
        top,
        bottom,
        x0,
    })
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
