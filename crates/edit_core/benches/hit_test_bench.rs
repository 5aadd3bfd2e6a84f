use criterion::{Criterion, black_box, criterion_group, criterion_main};
use edit_core::{FieldConfig, TextField, char_count, offset_at_x, prev_word_boundary};

fn advance(s: &str) -> f32 {
    char_count(s) as f32 * 7.5
}

fn bench_hit_test(c: &mut Criterion) {
    let ascii = "lorem ipsum dolor sit amet ".repeat(64);
    let wide = "日本語のテキスト😀".repeat(64);

    c.bench_function("offset_at_x/ascii", |b| {
        b.iter(|| offset_at_x(black_box(&ascii), black_box(3210.0), advance))
    });

    c.bench_function("offset_at_x/multibyte", |b| {
        b.iter(|| offset_at_x(black_box(&wide), black_box(2345.0), advance))
    });

    c.bench_function("prev_word_boundary", |b| {
        let n = char_count(&ascii);
        b.iter(|| prev_word_boundary(black_box(&ascii), black_box(n)))
    });

    c.bench_function("field/type_and_erase", |b| {
        b.iter(|| {
            let mut field = TextField::new(FieldConfig::default());
            for _ in 0..64 {
                field.insert_text(black_box("x€"));
            }
            while field.char_count() > 0 {
                field.delete_backward();
            }
            field
        })
    });
}

criterion_group!(benches, bench_hit_test);
criterion_main!(benches);
