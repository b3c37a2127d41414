use rowmat::{Matrix, Operand, cross, length, matmul, mult, normalized, vector3};

fn main() -> Result<(), rowmat::MatError> {
    // a 2x3 matrix from a generator, and its transpose
    let a = Matrix::from_fn(2, 3, |i, j| (i * 3 + j) as f32)?;
    let at = a.transpose();
    println!("A =");
    a.print();
    println!("A^T =");
    at.print();

    // A A^T is 2x2
    let aat = matmul(&a, &at)?;
    println!("A A^T =");
    aat.print();

    // n-ary product with a scalar in the middle
    if let Some(Operand::Matrix(m)) = mult(&[a.into(), Operand::Scalar(0.5), at.into()])? {
        println!("0.5 A A^T =");
        m.print();
    }

    let x = vector3(1.0, 0.0, 0.0);
    let y = Matrix::row_vector(&[0.0, 1.0, 0.0])?;
    let z = cross(&x, &y)?;
    println!("x cross y =");
    z.print();

    let v = vector3(3.0, 4.0, 12.0);
    println!("|v| = {}, |v/|v|| = {}", length(&v), length(&normalized(&v)));
    Ok(())
}
