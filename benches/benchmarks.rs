// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ghcards::{
    CardLinks, CardOptions, Locale, Session, SnippetFormat, Theme, ViewKind, build_url,
    parse_config
};

fn benchmark_default_stats_url(c: &mut Criterion) {
    let options = CardOptions::new("octocat");

    c.bench_function("build_url_defaults", |b| {
        b.iter(|| build_url(black_box(&options), black_box(ViewKind::Stats)))
    });
}

fn benchmark_full_stats_url(c: &mut Criterion) {
    let options = CardOptions::new("octocat")
        .with_theme(Theme::Dracula)
        .with_locale(Locale::from_tag("pt-br"))
        .with_hide_border(true)
        .with_include_all_commits(true);

    c.bench_function("build_url_all_params", |b| {
        b.iter(|| build_url(black_box(&options), black_box(ViewKind::Stats)))
    });
}

fn benchmark_card_links(c: &mut Criterion) {
    let options = CardOptions::new("some user & co").with_theme(Theme::Tokyonight);

    c.bench_function("card_links_encoded_identifier", |b| {
        b.iter(|| CardLinks::from_options(black_box(&options)))
    });
}

fn benchmark_session_snippets(c: &mut Criterion) {
    let mut session = Session::with_options(CardOptions::new("octocat").with_hide_border(true));

    c.bench_function("session_switch_and_snippet", |b| {
        b.iter(|| {
            for view in ViewKind::ALL {
                session.switch_view(view);
                black_box(session.snippet(SnippetFormat::Html));
            }
        })
    });
}

fn benchmark_config_parse(c: &mut Criterion) {
    let yaml = r"
username: octocat
theme: gruvbox
locale: ja
hide_border: true
include_all_commits: true
view: top-languages
";

    c.bench_function("parse_config", |b| {
        b.iter(|| parse_config(black_box(yaml)).expect("parse failed"))
    });
}

criterion_group!(
    benches,
    benchmark_default_stats_url,
    benchmark_full_stats_url,
    benchmark_card_links,
    benchmark_session_snippets,
    benchmark_config_parse
);
criterion_main!(benches);
