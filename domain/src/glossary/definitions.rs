//! Built-in glossary entries

use super::Definition;

pub(super) const DEFINITIONS: &[Definition] = &[
    Definition {
        term: "Integer",
        text: "A number that is not a fraction. (A whole number)",
    },
    Definition {
        term: "Fraction",
        text: "A numerical quantity that is not a whole number.",
    },
    Definition {
        term: "Rational",
        text: "A rational number is a number that can be expressed as the quotient/fraction \
               of two integers.",
    },
    Definition {
        term: "Parity",
        text: "The fact of being even or odd. ('The number's parity is even')",
    },
    Definition {
        term: "Divisors",
        text: "A divisor is a number that divides into another without a remainder.",
    },
    Definition {
        term: "Factors",
        text: "A factor of a number is a number that divides the given number evenly or \
               exactly, leaving no remainder.",
    },
    Definition {
        term: "Multiples",
        text: "Multiples are numbers you get when you multiply a certain number by an integer.",
    },
    Definition {
        term: "Fibonacci Series",
        text: "A series of numbers in which each number (Fibonacci number) is the sum of the \
               two preceding numbers.",
    },
    Definition {
        term: "Prime numbers",
        text: "A number is prime if it can only be divided by itself and 1.",
    },
    Definition {
        term: "Composite",
        text: "A composite number is a positive integer that has more than two factors. \
               They are the opposite of prime numbers.",
    },
    Definition {
        term: "Imaginary numbers",
        text: "A number that is expressed in terms of the square root of a negative number \
               (usually the square root of -1, represented by i or j).",
    },
    Definition {
        term: "Perfect",
        text: "A perfect number is a number that is equal to the sum of its factors other \
               than the number itself.",
    },
    Definition {
        term: "Perfect Square",
        text: "A perfect square is a number that can be expressed as the product of an \
               integer by itself or as the second exponent of an integer.",
    },
    Definition {
        term: "Sublime numbers",
        text: "A sublime number is a positive integer that has a perfect number of positive \
               factors, and the sum of those factors is also a perfect number. For example, \
               12 is sublime because it has six positive factors (1, 2, 3, 4, 6, and 12), \
               and the sum of those factors is 28, which is also a perfect number.",
    },
    Definition {
        term: "Triangular Numbers",
        text: "A triangular number fits into a series (1, 3, 6, 10, 15, etc.) obtained by the \
               continued summation of natural numbers. They can be visually represented in \
               the shape of a triangle.",
    },
    Definition {
        term: "Palindromic number",
        text: "A number is palindromic if it remains the same when its digits are reversed.",
    },
    Definition {
        term: "Armstrong number",
        text: "An Armstrong number is a number that is equal to the sum of its own digits, \
               each raised to the power of the number of digits in that number.",
    },
    Definition {
        term: "Automorphic number",
        text: "An automorphic number is an integer whose square ends with the same digits as \
               the number itself. For example, 25 squared is 625, so 25 is automorphic.",
    },
    Definition {
        term: "Abundant numbers",
        text: "A positive integer is abundant if the sum of its proper divisors is greater \
               than the number itself. The difference is known as the abundance.",
    },
    Definition {
        term: "Deficient numbers",
        text: "A deficient number is a positive integer for which the sum of its proper \
               divisors is less than the number itself. They are essentially the opposite of \
               abundant numbers.",
    },
];
