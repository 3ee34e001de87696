fn main() {
    let (tokens, errors) = nocturn::scanner::Scanner::new(r#""a\nb""#).scan_tokens();
    println!("{:?} {:?}", tokens, errors);
}
