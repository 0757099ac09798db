use matrixlib::{
    GaussianElimination, KernelOptions, LinalgContext, LinearSolver, Matrix, Pivoting,
    cross_product, dot_product, multiply,
};
use rand::Rng;

fn main() -> Result<(), matrixlib::LinalgError> {
    let n = 5;
    // diagonally dominant, so fixed pivoting never stalls
    let mut rng = rand::thread_rng();
    let a = Matrix::from_fn(n, n, |i, j| {
        let v: f64 = rng.gen_range(-1.0..1.0);
        if i == j { v + n as f64 } else { v }
    })?;
    let b: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();

    println!("A = {a}");
    println!("det(A) = {}", a.determinant()?);

    let inv = a.inverse()?;
    println!("A * inv(A) = {}", multiply(&a, &inv)?);

    let mut x = vec![0.0; n];
    let stats = GaussianElimination::default().solve(&a, &b, &mut x)?;
    println!("x = {x:?}, stats = {stats:?}");

    // [[0,1],[1,0]] only inverts with row interchange
    let p = Matrix::new(vec![vec![0.0, 1.0], vec![1.0, 0.0]])?;
    match p.inverse() {
        Ok(_) => println!("fixed pivoting inverted the permutation"),
        Err(e) => println!("fixed pivoting: {e}"),
    }
    let ctx = LinalgContext::new(KernelOptions::default().with_pivoting(Pivoting::Partial));
    println!("partial pivoting: {}", ctx.inverse(&p)?);

    let e1 = [1.0, 0.0, 0.0];
    let e2 = [0.0, 1.0, 0.0];
    println!("e1 . e2 = {}, e1 x e2 = {:?}", dot_product(&e1, &e2)?, cross_product(&e1, &e2)?);
    Ok(())
}
