//! Common Swift source fixtures for tests.

pub const NESTED_TYPES: &str = r#"struct Outer {
    struct Inner {
        enum Mode {
            case on, off
        }
        typealias ID = Int
    }
    class Helper {}
    typealias Name = String
}
enum Trailing {}"#;

pub const TWO_BRANCH_IF: &str = r#"#if DEBUG
func log(_ message: String) {}
#else
func log(_ message: String, level: Int) {}
#endif"#;

pub const VIEW_MODEL: &str = r#"import Foundation
import SwiftUI

@MainActor
public final class ViewModel: ObservableObject {
    @Published private(set) var items: [Item] = []
    var onSelect: ((Item) -> Void)?
    let loader: (URL) async throws -> Data

    init(loader: @escaping (URL) async throws -> Data) {
        self.loader = loader
    }

    func reload() async {
        guard let url = URL(string: "https://example.com") else { return }
        do {
            let data = try await loader(url)
            struct Payload: Decodable { let items: [Item] }
            _ = data
        } catch {
            items = []
        }
    }

    deinit {}
}

extension ViewModel {
    subscript(index: Int) -> Item? { items.indices.contains(index) ? items[index] : nil }
}"#;

/// A declaration preceded by `count` attribute lines
pub fn with_attribute_lines(count: usize, declaration: &str) -> String {
    let mut source = String::from("// leading comment\n");
    for i in 0..count {
        source.push_str(&format!("@attribute{i}\n"));
    }
    source.push_str(declaration);
    source
}

pub const SIBLING_TYPES: &str = r#"struct Container {
    struct A {}
    class B {}
    enum C {}
    typealias D = Int
}"#;

pub const NON_ASCII_TEXT: &str = r#"let greeting = "café — ünïcode"
func describe(name: String) -> String {
    return "\(name.isEmpty ? "—" : name) — done"
}
/* outer /* inner é */ still outer */
struct After {}"#;
