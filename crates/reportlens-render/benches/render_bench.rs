// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for report rendering in the reportlens-render crate.
// Renders a synthetic report of typical length with the built-in face, so the
// numbers cover layout, highlighting, painting, and cropping without
// depending on a font file.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use reportlens_core::RenderConfig;
use reportlens_render::{BuiltinFace, ReportRenderer};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Build a report shaped like a bone-scan report: a preamble, a highlighted
/// findings paragraph, then a conclusion with loose paragraph spacing.
fn synthetic_report() -> String {
    let mut text = String::from("检查方法：静脉注射显像剂后行全身骨显像及骨断层及融合显像。");
    for _ in 0..12 {
        text.push_str("右侧第5前肋、胸椎T8椎体可见异常放射性浓聚灶，CT示相应部位骨质破坏。\n");
    }
    text.push_str("骨断层及CT融合显像：");
    for _ in 0..8 {
        text.push_str("\n\n\n考虑骨转移瘤可能性大，建议结合临床。");
    }
    text
}

fn bench_render_report(c: &mut Criterion) {
    let config = RenderConfig::default();
    let face = Box::new(BuiltinFace::new(config.font_size));
    let renderer = ReportRenderer::new(face, config).expect("default config is valid");
    let text = synthetic_report();

    c.bench_function("render_report (synthetic, built-in face)", |b| {
        b.iter(|| {
            let rendered = renderer.render_text(black_box(&text));
            black_box(rendered.image);
        });
    });
}

criterion_group!(benches, bench_render_report);
criterion_main!(benches);
