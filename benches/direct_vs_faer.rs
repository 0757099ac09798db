use criterion::{black_box, Criterion, criterion_group, criterion_main};
use faer::linalg::solvers::SolveCore;
use matrixlib::{GaussianElimination, LinearSolver, Matrix, determinant};

fn bench_gauss_jordan_vs_faer(c: &mut Criterion) {
    let n = 200;
    // Diagonal shift keeps every fixed-position pivot well away from zero.
    let a = Matrix::from_fn(n, n, |i, j| {
        let v = ((i * n + j) as f64).sin();
        if i == j { v + n as f64 } else { v }
    })
    .unwrap();
    let b: Vec<f64> = (0..n).map(|i| (i as f64).cos()).collect();
    let mut x = vec![0.0; n];

    c.bench_function("matrixlib Gauss-Jordan", |ben| {
        let mut solver = GaussianElimination::default();
        ben.iter(|| {
            let _stats = solver.solve(black_box(&a), black_box(&b), black_box(&mut x)).unwrap();
        })
    });

    c.bench_function("matrixlib determinant", |ben| {
        ben.iter(|| determinant(black_box(&a)).unwrap())
    });

    let f = a.to_faer();
    c.bench_function("faer raw LU", |ben| {
        ben.iter(|| {
            let factor = faer::linalg::solvers::FullPivLu::new(f.as_ref());
            let mut y = b.clone();
            let n = y.len();
            let y_mat = faer::MatMut::from_column_major_slice_mut(&mut y, n, 1);
            factor.solve_in_place_with_conj(faer::Conj::No, y_mat);
        })
    });
}

criterion_group!(benches, bench_gauss_jordan_vs_faer);
criterion_main!(benches);
