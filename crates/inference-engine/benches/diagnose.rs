use criterion::{black_box, criterion_group, criterion_main, Criterion};
use inference_engine::{diagnose, SymptomRecord};
use symptom_intake::{DashboardLights, FanBehavior, LeakLocation, WaterLoss};

fn bench_diagnose(c: &mut Criterion) {
    let empty = SymptomRecord::default();
    let busy = SymptomRecord {
        gauge_temperature: "Vai pro vermelho, acima de 110".to_string(),
        water_loss: WaterLoss::Daily,
        fan_behavior: FanBehavior::NeverEngages,
        leak_location: LeakLocation::None,
        dashboard_lights: DashboardLights::Both,
        symptoms: "Ferve no trânsito, borbulha no reservatório, chiado na correia".to_string(),
        history: "Trocou a tampa mês passado".to_string(),
        ..Default::default()
    };

    c.bench_function("diagnose_empty", |b| b.iter(|| diagnose(black_box(&empty))));
    c.bench_function("diagnose_busy", |b| b.iter(|| diagnose(black_box(&busy))));
}

criterion_group!(benches, bench_diagnose);
criterion_main!(benches);
