use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use unicode_width::UnicodeWidthStr;

use foliotui::text::wrap_text;

// Panel copy, repeated: prose is what the panels actually wrap.
const TEXT: &str = "I craft scalable web applications using modern technologies. \
    Passionate about creating efficient solutions that bridge the gap between \
    frontend aesthetics and backend functionality. My journey in web development \
    started with curiosity about how websites work, and it has evolved into a \
    career focused on building scalable, user-centric applications. I believe in \
    writing clean, maintainable code and staying updated with the latest \
    technologies. When I'm not coding, you'll find me exploring new frameworks, \
    contributing to open source projects, or mentoring aspiring developers in my \
    community. Ready to turn your ideas into reality? I'm always excited to work \
    on challenging projects and collaborate with innovative teams.";

// Per-character folding, kept as the baseline the word-aware wrapper replaced
fn chars_fold(s: &str, width: usize) -> String {
    if width == 0 {
        return String::from("");
    }

    s.chars().fold(String::from(""), |acc: String, c: char| {
        let last_line = acc.lines().last().unwrap_or(&acc);
        if last_line.width() + c.to_string().width() > width {
            format!("{acc}\n{c}")
        } else {
            format!("{acc}{c}")
        }
    })
}

fn benchmark(c: &mut Criterion) {
    c.bench_function("chars-fold", |b| {
        b.iter(|| chars_fold(black_box(TEXT), black_box(40)))
    });

    c.bench_function("word-aware", |b| {
        b.iter(|| wrap_text(black_box(TEXT), black_box(40)))
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
