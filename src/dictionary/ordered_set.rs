//! Conjunto ordenado sobre un árbol binario de búsqueda
//!
//! Sin rebalanceo: el peor caso es O(n) con entrada ordenada, aceptable
//! para los tamaños de diccionario que maneja el programa.

use std::borrow::Borrow;
use std::cmp::Ordering;

/// Nodo del árbol
#[derive(Debug)]
struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

/// Conjunto de valores únicos comparables con recorrido en orden.
///
/// Invariante: para todo nodo, los valores del subárbol izquierdo son
/// menores que el nodo y los del derecho mayores. Los duplicados se
/// descartan sin modificar la forma del árbol.
#[derive(Debug, Default)]
pub struct OrderedSet<T: Ord> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T: Ord> OrderedSet<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserta un valor; si ya existe uno igual, no hace nada
    pub fn insert(&mut self, value: T) {
        let mut slot = &mut self.root;

        loop {
            match slot {
                Some(node) => match value.cmp(&node.value) {
                    Ordering::Less => slot = &mut node.left,
                    Ordering::Greater => slot = &mut node.right,
                    Ordering::Equal => return,
                },
                None => {
                    *slot = Some(Node::new(value));
                    self.len += 1;
                    return;
                }
            }
        }
    }

    /// Verifica si el valor está presente, descendiendo por el invariante
    /// del árbol. Acepta cualquier forma prestada del valor, como
    /// `HashMap::get` (un conjunto de `String` se consulta con `&str`).
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();

        while let Some(node) = current {
            match value.cmp(node.value.borrow()) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return true,
            }
        }

        false
    }

    /// Recorrido en orden (ascendente). El iterador es perezoso y puede
    /// crearse tantas veces como se necesite.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Número de valores almacenados
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Iterador en orden: subárbol izquierdo, nodo, subárbol derecho,
/// con una pila explícita en lugar de recursión
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

impl<'a, T: Ord> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
