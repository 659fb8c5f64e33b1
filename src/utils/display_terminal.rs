//! 터미널 출력 포맷팅 함수
//!
//! 서버 시작 시 설정 요약을 박스 형태로 출력합니다.

pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

pub fn print_setting(name: &str, value: &str) {
    println!("   ├─ {}: {}", name, value);
}

/// 시작 요약 출력
///
/// 저장소 백엔드, 데이터베이스 위치, 바인딩 주소를 보여줍니다.
pub fn print_startup_summary(backend: &str, location: &str, bind_address: &str, seeded: usize) {
    println!();
    print_boxed_title("USERS API READY");
    print_setting("Storage", backend);
    print_setting("Location", location);
    print_setting("Seeded users", &seeded.to_string());
    print_setting("Listening", bind_address);
    println!();
}
