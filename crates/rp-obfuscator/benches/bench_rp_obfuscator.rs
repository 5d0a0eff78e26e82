use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::seq::SliceRandom;
use rp_core::{OptimizeOptions, ResourceId, ResourceName, ResourceTable, ResourceType};
use rp_obfuscator::{shorten_file_name, DeobfuscationMap, Obfuscator};

const DIRS: &[&str] = &["drawable", "drawable-hdpi", "layout", "mipmap-xxhdpi", "color", "raw"];

fn generate_table(count: usize) -> ResourceTable {
    let mut rng = rand::thread_rng();
    let mut paths: Vec<(String, String)> = (0..count)
        .map(|i| {
            let dir = DIRS[i % DIRS.len()];
            (format!("res_{i}"), format!("res/{dir}/res_{i}.png"))
        })
        .collect();
    paths.shuffle(&mut rng);

    let mut table = ResourceTable::new();
    for (i, (entry, path)) in paths.iter().enumerate() {
        let name = ResourceName::new("com.bench", ResourceType::Drawable, entry.as_str());
        table.add_file_reference(&name, Some(ResourceId::new(0x7f, 0x02, i as u16)), "", path);
    }
    table
}

fn all_on() -> OptimizeOptions {
    OptimizeOptions {
        collapse_key_stringpool: true,
        shorten_resource_paths: true,
        ..Default::default()
    }
}

fn bench_shorten_file_name(c: &mut Criterion) {
    c.bench_function("shorten_file_name_1000", |b| {
        b.iter(|| {
            for i in 0..1000 {
                black_box(shorten_file_name(black_box(&format!("res/drawable/img_{i}.png")), 2));
            }
        })
    });
}

fn bench_consume(c: &mut Criterion) {
    for &count in &[1_000usize, 4_000, 10_000] {
        let table = generate_table(count);
        let obfuscator = Obfuscator::new(&all_on());
        c.bench_function(&format!("consume_{count}"), |b| {
            b.iter(|| {
                let mut t = table.clone();
                black_box(obfuscator.consume(&mut t).ok())
            })
        });
    }
}

fn bench_retrace(c: &mut Criterion) {
    let mut table = generate_table(4_000);
    let maps = Obfuscator::new(&all_on()).consume(&mut table).ok().unwrap_or_default();
    let mapping = DeobfuscationMap::from_maps(&maps);
    let trace: String = maps
        .shortened_path_map
        .values()
        .take(200)
        .map(|p| format!("  at inflate({p}) 0x7f020010\n"))
        .collect();
    c.bench_function("retrace_200_lines", |b| {
        b.iter(|| black_box(mapping.retrace(black_box(&trace)).ok()))
    });
}

criterion_group!(benches, bench_shorten_file_name, bench_consume, bench_retrace);
criterion_main!(benches);
